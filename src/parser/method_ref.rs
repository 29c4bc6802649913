//! Method references and the line formats they are read from.
//!
//! Two spellings are accepted:
//! - descriptor form, as printed by dexdump and smali: `Lcom/example/Foo;->bar(I)V`
//! - dotted form: `com.example.Foo.bar(int)`, `com.example.Foo#bar`, or a bare
//!   class name `com.example.Foo`

use crate::utils::error::ParseError;

/// One referenced method
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodRef {
    /// Fully-qualified declaring class in dotted form (`java.lang.Object[]` for arrays)
    pub declaring_class: String,

    /// Method name, empty when the line named only a class
    pub name: String,

    /// Raw signature text as it appeared in the listing
    pub descriptor: Option<String>,
}

impl MethodRef {
    pub fn new(declaring_class: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            declaring_class: declaring_class.into(),
            name: name.into(),
            descriptor: None,
        }
    }

    pub fn with_descriptor(mut self, descriptor: impl Into<String>) -> Self {
        self.descriptor = Some(descriptor.into());
        self
    }

    /// Namespace portion of the declaring class
    pub fn package_name(&self) -> &str {
        package_name_only(&self.declaring_class)
    }
}

/// Strip the simple class name from a dotted class name.
///
/// Returns the empty string for classes in the unnamed package.
pub fn package_name_only(class_name: &str) -> &str {
    match class_name.rfind('.') {
        Some(idx) => &class_name[..idx],
        None => "",
    }
}

/// Convert a type descriptor (`Lcom/example/Foo;`, `[I`) to dotted form.
pub fn descriptor_to_dot(descriptor: &str) -> Result<String, ParseError> {
    let element = descriptor.trim_start_matches('[');
    let dimensions = descriptor.len() - element.len();

    let mut dotted = if let Some(body) = element.strip_prefix('L') {
        let class = body
            .strip_suffix(';')
            .ok_or_else(|| ParseError::InvalidDescriptor(descriptor.to_string()))?;
        if class.is_empty() {
            return Err(ParseError::InvalidDescriptor(descriptor.to_string()));
        }
        class.replace('/', ".")
    } else {
        primitive_label(element)
            .ok_or_else(|| ParseError::InvalidDescriptor(descriptor.to_string()))?
            .to_string()
    };

    for _ in 0..dimensions {
        dotted.push_str("[]");
    }

    Ok(dotted)
}

fn primitive_label(code: &str) -> Option<&'static str> {
    let label = match code {
        "Z" => "boolean",
        "B" => "byte",
        "S" => "short",
        "C" => "char",
        "I" => "int",
        "J" => "long",
        "F" => "float",
        "D" => "double",
        "V" => "void",
        _ => return None,
    };
    Some(label)
}

/// Parse one trimmed, non-empty listing line.
///
/// Errors carry a human-readable reason; the caller adds location.
pub fn parse_line(line: &str) -> Result<MethodRef, String> {
    let method_ref = if let Some((class_desc, member)) = line.split_once("->") {
        let class = descriptor_to_dot(class_desc.trim()).map_err(|e| e.to_string())?;
        let member = member.trim();
        let (name, signature) = split_signature(member);
        let method_ref = MethodRef::new(class, name);
        match signature {
            Some(sig) => method_ref.with_descriptor(sig),
            None => method_ref,
        }
    } else if let Some((class, name)) = line.split_once('#') {
        let (name, signature) = split_signature(name.trim());
        let method_ref = MethodRef::new(class.trim(), name);
        match signature {
            Some(sig) => method_ref.with_descriptor(sig),
            None => method_ref,
        }
    } else if let Some(paren) = line.find('(') {
        let (qualified, signature) = line.split_at(paren);
        let (class, name) = qualified
            .rsplit_once('.')
            .ok_or_else(|| format!("missing declaring class in '{}'", line))?;
        MethodRef::new(class, name).with_descriptor(signature)
    } else if is_class_descriptor(line) {
        MethodRef::new(descriptor_to_dot(line).map_err(|e| e.to_string())?, "")
    } else {
        MethodRef::new(line, "")
    };

    validate_class_name(&method_ref.declaring_class)?;
    Ok(method_ref)
}

/// `bar(I)V` -> (`bar`, Some(`(I)V`)); `value:I` -> (`value`, Some(`:I`))
fn split_signature(member: &str) -> (&str, Option<&str>) {
    match member.find(['(', ':']) {
        Some(idx) => (&member[..idx], Some(&member[idx..])),
        None => (member, None),
    }
}

fn is_class_descriptor(line: &str) -> bool {
    (line.starts_with('L') || line.starts_with('[')) && line.ends_with(';') && !line.contains('.')
}

fn validate_class_name(class: &str) -> Result<(), String> {
    if class.is_empty() {
        return Err("empty declaring class".to_string());
    }
    if class.chars().any(char::is_whitespace) {
        return Err(format!("whitespace in declaring class '{}'", class));
    }
    Ok(())
}
