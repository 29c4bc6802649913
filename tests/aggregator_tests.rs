use dex_method_counts::aggregator::{
    aggregate_counts, build_methods_tree, build_namespace_tree, counts_consistent, flatten,
    is_low_signal, Compactor, Node,
};
use dex_method_counts::output::report_to_string;
use dex_method_counts::parser::MethodRef;
use pretty_assertions::assert_eq;

fn refs(classes: &[&str]) -> Vec<MethodRef> {
    classes.iter().map(|c| MethodRef::new(*c, "m")).collect()
}

fn sample_classes() -> Vec<&'static str> {
    vec![
        "android.support.v4.app.Fragment",
        "android.support.v4.app.Fragment",
        "android.support.v4.view.ViewPager",
        "android.app.Activity",
        "com.google.gson.Gson",
        "com.google.gson.Gson",
        "com.google.gson.internal.Excluder",
        "com.squareup.okhttp.Call",
        "com.example.app.MainActivity",
        "com.example.app.MainActivity",
        "com.example.app.ui.ListFragment",
        "org.apache.http.HttpEntity",
        "okio.Buffer",
        "java.lang.Object",
        "java.lang.Object[]",
        "java.util.List",
        "Unpackaged",
    ]
}

#[test]
fn test_total_equals_input_length() {
    let classes = sample_classes();
    let root = build_methods_tree(&refs(&classes), &Compactor::default());

    assert_eq!(root.total_count, classes.len() as u64);
    assert_eq!(root.direct_count, 0);
}

#[test]
fn test_totals_consistent_after_aggregation() {
    let root = build_methods_tree(&refs(&sample_classes()), &Compactor::default());
    assert!(counts_consistent(&root));
}

#[test]
fn test_simple_tree_without_collapsing() {
    let root = build_methods_tree(&refs(&["a.b.Foo", "a.b.Bar", "a.c.Baz"]), &Compactor::without_prefixes());

    let a = root.child("a").unwrap();
    assert_eq!(a.total_count, 3);
    let b = a.child("b").unwrap();
    assert_eq!((b.direct_count, b.total_count), (2, 2));
    let c = a.child("c").unwrap();
    assert_eq!((c.direct_count, c.total_count), (1, 1));
}

#[test]
fn test_single_prefixed_class() {
    let compactor = Compactor::without_prefixes().with_prefix("com");
    let root = build_methods_tree(&refs(&["com.example.Foo"]), &compactor);

    assert_eq!(root.children.len(), 1);
    let node = root.child("com.example").unwrap();
    assert_eq!(node.total_count, 1);
}

#[test]
fn test_empty_input() {
    let root = build_methods_tree(&[], &Compactor::default());

    assert!(root.is_leaf());
    assert_eq!(root.total_count, 0);
    assert_eq!(
        report_to_string(&root),
        "\nMethod usage by top level packages:\n\nTotal method count: 0\n"
    );
}

#[test]
fn test_rendering_is_order_independent() {
    let classes = sample_classes();
    let mut reversed = classes.clone();
    reversed.reverse();

    let forward = build_methods_tree(&refs(&classes), &Compactor::default());
    let backward = build_methods_tree(&refs(&reversed), &Compactor::default());

    assert_eq!(report_to_string(&forward), report_to_string(&backward));
}

#[test]
fn test_low_signal_pass_idempotent_after_compaction() {
    let mut root = build_namespace_tree(sample_classes());
    Compactor::default().compact(&mut root);
    let compacted = root.clone();

    flatten(&mut root, &is_low_signal);

    assert_eq!(root, compacted);
}

#[test]
fn test_pass_order_matters() {
    let classes = ["foo.com.a.X", "foo.com.b.Y"];
    let compactor = Compactor::without_prefixes().with_prefix("com");

    let mut prefixes_first = build_namespace_tree(classes);
    compactor.compact(&mut prefixes_first);

    let mut low_signal_first = build_namespace_tree(classes);
    flatten(&mut low_signal_first, &is_low_signal);
    flatten(&mut low_signal_first, &|n: &Node| compactor.is_common_prefix(n));

    let names = |node: &Node| -> Vec<String> { node.children.keys().cloned().collect() };

    let foo = prefixes_first.child("foo").unwrap();
    assert_eq!(names(foo), vec!["com.a", "com.b"]);

    assert_eq!(names(&low_signal_first), vec!["foo.com"]);
    let foo_com = low_signal_first.child("foo.com").unwrap();
    assert_eq!(names(foo_com), vec!["a", "b"]);
}

#[test]
fn test_prefix_with_own_methods_keeps_count() {
    let compactor = Compactor::without_prefixes().with_prefix("com");
    let root = build_methods_tree(&refs(&["com.Top", "com.example.a.X", "com.example.b.Y"]), &compactor);

    let names: Vec<&str> = root.children.keys().map(String::as_str).collect();
    assert_eq!(names, vec!["com", "com.example"]);
    assert_eq!(root.child("com").unwrap().total_count, 1);
    assert_eq!(root.total_count, 3);
}

#[test]
fn test_full_report_for_sample() {
    let root = build_methods_tree(&refs(&sample_classes()), &Compactor::default());

    let expected = "\
<default>: 1
android: 4
    app: 1
    support.v4: 3
        app: 2
        view: 1
com.example.app: 3
    ui: 1
com.google.gson: 3
    internal: 1
com.squareup.okhttp: 1
java: 3
    lang: 2
    util: 1
okio: 1
org.apache.http: 1

Method usage by top level packages:
<default>: 1
android: 4
com.example.app: 3
com.google.gson: 3
com.squareup.okhttp: 1
java: 3
okio: 1
org.apache.http: 1

Total method count: 17
";

    assert_eq!(report_to_string(&root), expected);
}

#[test]
fn test_aggregate_after_manual_compaction() {
    let mut root = build_namespace_tree(["x.y.A", "x.y.B", "x.z.C"]);
    Compactor::without_prefixes().compact(&mut root);
    let total = aggregate_counts(&mut root);

    assert_eq!(total, 3);
    assert_eq!(root.child("x").unwrap().total_count, 3);
}
