//! Reading documentation files without reflection metadata.

use pretty_assertions::assert_eq;
use std::path::{Path, PathBuf};
use xmldoc::plain_text::{LineEnding, render, render_member};
use xmldoc::{DocumentationFile, ElementKind, Error, Member, MemberKind};

fn fixture_path(name: &str) -> PathBuf {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    Path::new(manifest_dir).join("test-fixtures").join(name)
}

fn read_fixture() -> Vec<Member> {
    xmldoc::read(&fixture_path("My.Library.xml")).unwrap()
}

fn find<'a>(members: &'a [Member], id: &str) -> &'a Member {
    members
        .iter()
        .find(|m| m.id() == id)
        .unwrap_or_else(|| panic!("no member {}", id))
}

#[test]
fn test_reads_every_named_member_in_order() {
    let ids: Vec<String> = read_fixture().iter().map(|m| m.id().to_string()).collect();
    assert_eq!(
        ids,
        vec![
            "T:My.Namespace.Foo",
            "T:My.Namespace.Baz",
            "T:My.Namespace.IShape",
            "T:My.Namespace.Color",
            "T:My.Namespace.Removed",
            "M:My.Namespace.Foo.Shout(My.Namespace.Baz,System.Int32)",
            "M:My.Namespace.Foo.#ctor(System.String)",
            "P:My.Namespace.Foo.Size",
            "F:My.Namespace.Foo.count",
            "E:My.Namespace.Foo.Changed",
            "N:My.Namespace",
            "M:My.Namespace.Foo.Future",
        ]
    );
}

#[test]
fn test_kinds_come_from_prefix_only() {
    let members = read_fixture();

    assert_eq!(find(&members, "T:My.Namespace.IShape").kind(), &MemberKind::Type);
    assert_eq!(
        find(&members, "M:My.Namespace.Foo.Shout(My.Namespace.Baz,System.Int32)").kind(),
        &MemberKind::Method
    );
    assert_eq!(find(&members, "N:My.Namespace").kind(), &MemberKind::Unknown);
    assert!(members.iter().all(|m| m.handle().is_none()));
}

#[test]
fn test_summary_with_cross_reference() {
    let members = read_fixture();
    let summary = find(&members, "T:My.Namespace.Foo").summary().unwrap();

    assert_eq!(
        render(std::slice::from_ref(summary)),
        "Does foo things with a My.Namespace.Baz."
    );
}

#[test]
fn test_member_rendering() {
    let members = read_fixture();
    let foo = find(&members, "T:My.Namespace.Foo");

    insta::assert_debug_snapshot!(
        render_member(foo, LineEnding::Lf),
        @r#""Does foo things with a My.Namespace.Baz.\nFirst paragraph.\nSecond paragraph, see null.\n""#
    );
    assert_eq!(
        render_member(foo, LineEnding::CrLf),
        "Does foo things with a My.Namespace.Baz.\r\nFirst paragraph.\r\nSecond paragraph, see null.\r\n"
    );
}

#[test]
fn test_params_and_refs() {
    let members = read_fixture();
    let shout = find(&members, "M:My.Namespace.Foo.Shout(My.Namespace.Baz,System.Int32)");

    let names: Vec<String> = shout
        .params()
        .filter_map(|p| match p.kind() {
            ElementKind::Param { name } => Some(name.clone()),
            _ => None,
        })
        .collect();
    assert_eq!(names, vec!["baz", "times"]);
    assert_eq!(
        shout.param("times").map(|p| p.text_content()),
        Some("How often.".to_string())
    );
    assert_eq!(
        render(std::slice::from_ref(shout.summary().unwrap())),
        "Shouts times times."
    );
    assert_eq!(
        shout.returns().map(|r| r.text_content()),
        Some("Nothing useful.".to_string())
    );
}

#[test]
fn test_code_example_is_dedented() {
    let members = read_fixture();
    let ctor = find(&members, "M:My.Namespace.Foo.#ctor(System.String)");
    let example = ctor.elements_named("example").next().unwrap();
    let code = example.children_named("code").next().unwrap();

    assert_eq!(
        code.kind(),
        &ElementKind::Code {
            content: "var foo = new Foo(\"x\");\nfoo.Shout(baz, 2);".to_string()
        }
    );
}

#[test]
fn test_unknown_tag_inside_summary_keeps_children() {
    let members = read_fixture();
    let summary = find(&members, "M:My.Namespace.Foo.Future").summary().unwrap();

    let unknown = &summary.children()[1];
    assert_eq!(
        unknown.kind(),
        &ElementKind::Unknown {
            name: "future".to_string()
        }
    );
    assert_eq!(unknown.children().len(), 2);
    assert_eq!(
        render(std::slice::from_ref(summary)),
        "Before inner code after."
    );
}

#[test]
fn test_assembly_name_and_positions() {
    let path = fixture_path("My.Library.xml");
    let file = DocumentationFile::open(&path).unwrap();

    assert_eq!(file.assembly_name().as_deref(), Some("My.Library"));

    let baz = file.member("T:My.Namespace.Baz").unwrap();
    let info = baz.source_info().unwrap();
    assert_eq!((info.line(), info.column()), (16, 9));
}

#[test]
fn test_members_iterator_is_lazy_and_repeatable() {
    let file = DocumentationFile::open(&fixture_path("My.Library.xml")).unwrap();

    let first = file.members().next().unwrap();
    assert_eq!(first.id(), "T:My.Namespace.Foo");
    assert_eq!(file.members().count(), 12);
    assert_eq!(file.members().count(), 12);
}

#[test]
fn test_missing_file_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Nope.xml");

    match xmldoc::read(&path) {
        Err(Error::NotFound { path: reported }) => assert_eq!(reported, path),
        other => panic!("expected NotFound, got {:?}", other),
    }
}

#[test]
fn test_malformed_file_is_xml_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Broken.xml");
    std::fs::write(&path, "<doc><members><member name=\"T:A\"></members></doc>").unwrap();

    let err = xmldoc::read(&path).unwrap_err();
    assert!(matches!(err, Error::Xml { .. }), "{:?}", err);
    assert!(err.to_string().contains("Broken.xml"));
}
