//! End-to-end coverage of the tag operations through the API facade,
//! against the in-memory store.

use std::path::{Path, PathBuf};
use xatag::api::{parse_tags, DeleteMode, XatagApi};
use xatag::commands::helpers::{read_tag_keys, read_tags_as_dict};
use xatag::model::Tag;
use xatag::store::memory::InMemoryStore;

fn api_with_files(paths: &[&str]) -> XatagApi<InMemoryStore> {
    let mut store = InMemoryStore::new();
    for path in paths {
        store.touch(*path);
    }
    XatagApi::new(store)
}

fn group(api: &XatagApi<InMemoryStore>, path: &str, key: &str) -> Vec<String> {
    read_tags_as_dict(api.store(), Path::new(path))
        .unwrap()
        .get(key)
        .map(|set| set.iter().cloned().collect())
        .unwrap_or_default()
}

fn paths(names: &[&str]) -> Vec<PathBuf> {
    names.iter().map(PathBuf::from).collect()
}

#[test]
fn add_then_read_round_trips() {
    let mut api = api_with_files(&["/f"]);
    api.add_tags(
        &paths(&["/f"]),
        &[Tag::new("", "x"), Tag::new("genre", "rock")],
        false,
    )
    .unwrap();

    let dict = read_tags_as_dict(api.store(), Path::new("/f")).unwrap();
    assert_eq!(dict.len(), 2);
    assert_eq!(group(&api, "/f", ""), vec!["x"]);
    assert_eq!(group(&api, "/f", "genre"), vec!["rock"]);
}

#[test]
fn add_is_idempotent() {
    let mut api = api_with_files(&["/f"]);
    let tags = parse_tags(&["genre:classical;rock", "favorite"]).unwrap();
    api.add_tags(&paths(&["/f"]), &tags, false).unwrap();
    api.add_tags(&paths(&["/f"]), &tags, false).unwrap();

    assert_eq!(group(&api, "/f", "genre"), vec!["classical", "rock"]);
    assert_eq!(group(&api, "/f", ""), vec!["favorite"]);
}

#[test]
fn set_wildcard_removes_the_group() {
    let mut api = api_with_files(&["/f"]);
    api.add_tags(&paths(&["/f"]), &parse_tags(&["genre:rock"]).unwrap(), false)
        .unwrap();

    api.set_tags(&paths(&["/f"]), &parse_tags(&["genre:"]).unwrap(), false, false)
        .unwrap();
    assert!(!read_tags_as_dict(api.store(), Path::new("/f"))
        .unwrap()
        .contains_key("genre"));
}

#[test]
fn set_all_leaves_exactly_the_request() {
    let mut api = api_with_files(&["/f"]);
    api.add_tags(
        &paths(&["/f"]),
        &parse_tags(&["one", "genre:rock", "artist:The XX"]).unwrap(),
        false,
    )
    .unwrap();

    api.set_tags(&paths(&["/f"]), &parse_tags(&["only", "genre:jazz"]).unwrap(), true, false)
        .unwrap();

    let dict = read_tags_as_dict(api.store(), Path::new("/f")).unwrap();
    assert_eq!(dict.len(), 2);
    assert_eq!(group(&api, "/f", ""), vec!["only"]);
    assert_eq!(group(&api, "/f", "genre"), vec!["jazz"]);
}

#[test]
fn delete_values_then_the_rest_removes_the_attribute() {
    let mut api = api_with_files(&["/f"]);
    api.add_tags(&paths(&["/f"]), &parse_tags(&["tag1;tag2;tag3"]).unwrap(), false)
        .unwrap();

    api.delete_tags(
        &paths(&["/f"]),
        &parse_tags(&["tag2"]).unwrap(),
        DeleteMode::Listed,
        false,
    )
    .unwrap();
    assert_eq!(group(&api, "/f", ""), vec!["tag1", "tag3"]);

    api.delete_tags(
        &paths(&["/f"]),
        &parse_tags(&["tag1;tag3"]).unwrap(),
        DeleteMode::Listed,
        false,
    )
    .unwrap();
    assert!(read_tag_keys(api.store(), Path::new("/f"))
        .unwrap()
        .is_empty());
}

#[test]
fn delete_other_keeps_the_selection() {
    let mut api = api_with_files(&["/f"]);
    api.add_tags(
        &paths(&["/f"]),
        &parse_tags(&["tag1;tag2", "genre:rock;jazz", "artist:Arvo Pärt"]).unwrap(),
        false,
    )
    .unwrap();

    api.delete_tags(
        &paths(&["/f"]),
        &parse_tags(&["tag1", "genre:"]).unwrap(),
        DeleteMode::Others,
        false,
    )
    .unwrap();

    let dict = read_tags_as_dict(api.store(), Path::new("/f")).unwrap();
    assert_eq!(dict.len(), 2);
    assert_eq!(group(&api, "/f", ""), vec!["tag1"]);
    assert_eq!(group(&api, "/f", "genre"), vec!["jazz", "rock"]);
}

#[test]
fn delete_all_clears_every_group() {
    let mut api = api_with_files(&["/f"]);
    api.add_tags(
        &paths(&["/f"]),
        &parse_tags(&["tag1", "genre:rock"]).unwrap(),
        false,
    )
    .unwrap();

    api.delete_tags(&paths(&["/f"]), &[], DeleteMode::All, false)
        .unwrap();
    assert!(read_tags_as_dict(api.store(), Path::new("/f"))
        .unwrap()
        .is_empty());
}

#[test]
fn copy_merges_into_destinations() {
    let mut api = api_with_files(&["/src", "/dst"]);
    api.add_tags(
        &paths(&["/src"]),
        &parse_tags(&["tag1;tag2", "genre:rock"]).unwrap(),
        false,
    )
    .unwrap();
    api.add_tags(&paths(&["/dst"]), &parse_tags(&["tag3", "other:yes"]).unwrap(), false)
        .unwrap();

    let src_before = read_tags_as_dict(api.store(), Path::new("/src")).unwrap();
    api.copy_tags(Path::new("/src"), &paths(&["/dst"]), None, false, false)
        .unwrap();

    assert_eq!(
        read_tags_as_dict(api.store(), Path::new("/src")).unwrap(),
        src_before
    );
    assert_eq!(group(&api, "/dst", ""), vec!["tag1", "tag2", "tag3"]);
    assert_eq!(group(&api, "/dst", "genre"), vec!["rock"]);
    assert_eq!(group(&api, "/dst", "other"), vec!["yes"]);
}

#[test]
fn copy_with_filter_and_complement() {
    let mut api = api_with_files(&["/src", "/a", "/b"]);
    api.add_tags(
        &paths(&["/src"]),
        &parse_tags(&["tag1;tag2", "genre:rock;jazz"]).unwrap(),
        false,
    )
    .unwrap();

    let filter = parse_tags(&["tag2", "genre:"]).unwrap();
    api.copy_tags(Path::new("/src"), &paths(&["/a"]), Some(&filter), false, false)
        .unwrap();
    assert_eq!(group(&api, "/a", ""), vec!["tag2"]);
    assert_eq!(group(&api, "/a", "genre"), vec!["jazz", "rock"]);

    api.copy_tags(Path::new("/src"), &paths(&["/b"]), Some(&filter), true, false)
        .unwrap();
    assert_eq!(group(&api, "/b", ""), vec!["tag1"]);
    assert!(group(&api, "/b", "genre").is_empty());
}

#[test]
fn list_reports_every_file() {
    let mut api = api_with_files(&["/a", "/b"]);
    api.add_tags(&paths(&["/a"]), &parse_tags(&["one"]).unwrap(), false)
        .unwrap();

    let result = api.list_tags(&paths(&["/a", "/b"]), false).unwrap();
    assert_eq!(result.listed.len(), 2);
    assert_eq!(result.listed[0].path, PathBuf::from("/a"));
    assert!(!result.listed[0].tags.is_empty());
    assert!(result.listed[1].tags.is_empty());
}

#[test]
fn operations_on_unknown_files_fail() {
    let mut api = api_with_files(&[]);
    let err = api
        .add_tags(&paths(&["/missing"]), &parse_tags(&["x"]).unwrap(), false)
        .unwrap_err();
    assert!(err.to_string().contains("No such file"));
}

#[test]
fn parsed_expressions_drive_the_pipeline() {
    let mut api = api_with_files(&["/f"]);
    let tags = parse_tags(&["genre:classical;   rock;\n bluegrass\tstuff"]).unwrap();
    api.add_tags(&paths(&["/f"]), &tags, false).unwrap();
    assert_eq!(
        group(&api, "/f", "genre"),
        vec!["bluegrass stuff", "classical", "rock"]
    );
}
