use lazytodo_core::db::{open_db, open_db_in_memory};
use lazytodo_core::store::keys;
use lazytodo_core::{
    Item, KeyValueStore, NullRenderer, PageSize, Setting, Settings, SortMode, SqliteKvStore,
    Theme, TodoService, TodoStore,
};

#[test]
fn collection_and_settings_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lazytodo.sqlite3");

    {
        let conn = open_db(&path).unwrap();
        let mut service = TodoService::new(TodoStore::new(SqliteKvStore::new(&conn)));
        let mut renderer = NullRenderer;
        service.add("water plants", &mut renderer);
        service.add("call mom", &mut renderer);
        service.change_sort(SortMode::Abc, &mut renderer);
        service.change_page_size(PageSize::new(5).unwrap(), &mut renderer);
        service.toggle_theme(&mut renderer);
    }

    let conn = open_db(&path).unwrap();
    let store = TodoStore::new(SqliteKvStore::new(&conn));
    let texts: Vec<String> = store.load_items().into_iter().map(|it| it.text).collect();
    assert_eq!(texts, ["water plants", "call mom"]);

    let settings = store.load_settings();
    assert_eq!(settings.sort_mode, SortMode::Abc);
    assert_eq!(settings.items_per_page.get(), 5);
    assert_eq!(store.load_theme(), Theme::Dark);

    let service = TodoService::new(store);
    assert_eq!(service.state().current_page, 1);
    let view = service.view();
    let ranked: Vec<&str> = view.items.iter().map(|it| it.text.as_str()).collect();
    assert_eq!(ranked, ["call mom", "water plants"]);
}

#[test]
fn values_are_stored_in_local_storage_shape() {
    let conn = open_db_in_memory().unwrap();
    let kv = SqliteKvStore::new(&conn);
    let store = TodoStore::new(&kv);

    store
        .save_items(&[Item {
            id: 1700000000000,
            text: "buy milk".to_string(),
            checked: false,
        }])
        .unwrap();
    store.save_setting(Setting::Sort(SortMode::TimeDesc)).unwrap();
    store
        .save_setting(Setting::ItemsPerPage(PageSize::new(100).unwrap()))
        .unwrap();

    assert_eq!(
        kv.get(keys::TODOS).unwrap().as_deref(),
        Some(r#"[{"id":1700000000000,"text":"buy milk","checked":false}]"#)
    );
    assert_eq!(kv.get(keys::CURRENT_SORT).unwrap().as_deref(), Some("timeDesc"));
    assert_eq!(kv.get(keys::ITEMS_PER_PAGE).unwrap().as_deref(), Some("100"));
}

#[test]
fn corrupt_rows_fall_back_to_defaults() {
    let conn = open_db_in_memory().unwrap();
    conn.execute_batch(
        "INSERT INTO kv_entries (key, value) VALUES
            ('todos', '[{\"id\": \"oops\"}]'),
            ('itemsPerPage', 'lots'),
            ('currentSort', 'newest'),
            ('theme', 'neon'),
            ('bgColor', 'rgb(1, 2)');",
    )
    .unwrap();

    let store = TodoStore::new(SqliteKvStore::new(&conn));
    assert!(store.load_items().is_empty());
    assert_eq!(store.load_settings(), Settings::default());
    assert_eq!(store.load_theme(), Theme::Light);
    assert_eq!(store.load_background(), None);
}
