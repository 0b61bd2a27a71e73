use std::path::PathBuf;

use icy_pixel::{AssetKind, AssetStore, Font, JsonStore, MemoryStore, Picture, PixelError, Stamp};
use pretty_assertions::assert_eq;

use crate::init_logging;

fn temp_root(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("icy_pixel_{name}_{}", std::process::id()))
}

#[test]
fn test_memory_store() {
    let mut store = MemoryStore::new();
    store.save_font("std", &Font::standard()).unwrap();
    store.save_stamp("logo", &Stamp::standard()).unwrap();

    assert_eq!(Font::standard(), store.load_font("std").unwrap());
    assert_eq!(Stamp::standard(), store.load_stamp("logo").unwrap());
    assert!(matches!(
        store.load_picture("missing"),
        Err(PixelError::AssetNotFound { kind: AssetKind::Picture, .. })
    ));
}

#[test]
fn test_json_store() {
    init_logging();
    let root = temp_root("json");
    let mut store = JsonStore::new(&root);

    let font = Font::standard();
    let mut stamp = Stamp::new(&[0b110, 0b011]);
    stamp.prepare();
    let picture = Picture::new(2, 2, vec![1, 2, 3, 4]).unwrap().with_segments(1, 1).with_color_key(4);

    store.save_font("std", &font).unwrap();
    store.save_stamp("s", &stamp).unwrap();
    store.save_picture("p", &picture).unwrap();

    assert_eq!(font, store.load_font("std").unwrap());
    assert_eq!(stamp, store.load_stamp("s").unwrap());
    assert_eq!(picture, store.load_picture("p").unwrap());

    let json = std::fs::read_to_string(store.path_for(AssetKind::Font, "std")).unwrap();
    for field in ["\"chars\"", "\"OffsetX\"", "\"sizeX\"", "\"gn\"", "\"ga\"", "\"len\""] {
        assert!(json.contains(field), "missing {field}");
    }
    let json = std::fs::read_to_string(store.path_for(AssetKind::Picture, "p")).unwrap();
    for field in ["\"colorKey\"", "\"segX\"", "\"sizeY\"", "\"mode\""] {
        assert!(json.contains(field), "missing {field}");
    }

    assert!(matches!(store.load_stamp("nope"), Err(PixelError::AssetNotFound { .. })));
    std::fs::remove_dir_all(root).unwrap();
}

#[test]
fn test_json_store_reads_plain_records() {
    init_logging();
    let root = temp_root("plain");
    std::fs::create_dir_all(&root).unwrap();
    let store = JsonStore::new(&root);
    std::fs::write(store.path_for(AssetKind::Stamp, "raw"), r#"{"prepared":false,"len":0,"data":[5,2]}"#).unwrap();
    std::fs::write(store.path_for(AssetKind::Font, "bad"), "{ not json").unwrap();

    let mut stamp = store.load_stamp("raw").unwrap();
    assert_eq!(3, stamp.width());
    assert!(matches!(store.load_font("bad"), Err(PixelError::Json(_))));
    std::fs::remove_dir_all(root).unwrap();
}

#[test]
fn test_json_store_rejects_picture_size() {
    init_logging();
    let root = temp_root("huge");
    std::fs::create_dir_all(&root).unwrap();
    let store = JsonStore::new(&root);
    std::fs::write(
        store.path_for(AssetKind::Picture, "huge"),
        r#"{"sizeX":2,"sizeY":2147483647,"segX":1,"segY":1,"data":[]}"#,
    )
    .unwrap();

    assert!(matches!(
        store.load_picture("huge"),
        Err(PixelError::Dimension { width: 2, height: 2147483647 })
    ));
    std::fs::remove_dir_all(root).unwrap();
}
