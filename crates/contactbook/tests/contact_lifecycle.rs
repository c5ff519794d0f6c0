//! End-to-end contact lifecycle through validation, sanitising, and the
//! repository, against a real file in a temporary directory.

use std::thread::sleep;
use std::time::Duration;

use contactbook::sanitize::sanitize_draft;
use contactbook::validation::is_valid;
use contactbook::{ContactDraft, ContactRepository, ContactStore};
use tempfile::TempDir;

fn setup_repository() -> (TempDir, ContactRepository) {
    let dir = TempDir::new().expect("temp dir");
    let store = ContactStore::open(dir.path().join("data").join("contacts.json"))
        .expect("open store");
    (dir, ContactRepository::new(store))
}

fn submit(repo: &ContactRepository, draft: &ContactDraft) -> contactbook::Contact {
    assert!(is_valid(draft), "draft should validate: {draft:?}");
    repo.create(sanitize_draft(draft)).expect("create")
}

#[test]
fn test_create_list_update_delete() {
    let (_dir, repo) = setup_repository();

    let original = ContactDraft::new("Ada", "Lovelace", "ada@example.com", "Mathematician");
    let created = submit(&repo, &original);
    assert!(!created.id.is_empty());
    assert_eq!(created.created_at, created.updated_at);
    assert_eq!(created.to_draft(), original);

    let listed = repo.list_all().unwrap();
    assert!(listed.iter().any(|c| c.id == created.id));

    sleep(Duration::from_millis(5));
    let revised = ContactDraft::new("Ada", "Lovelace", "ada@example.com", "<b>Pioneer</b>");
    assert!(is_valid(&revised));
    let updated = repo
        .update(&created.id, sanitize_draft(&revised))
        .unwrap()
        .expect("contact exists");
    assert_eq!(updated.notes, "<b>Pioneer</b>");

    let fetched = repo.get_by_id(&created.id).unwrap().unwrap();
    assert_eq!(fetched.notes, "<b>Pioneer</b>");
    assert!(fetched.updated_at > created.updated_at);
    assert_eq!(fetched.created_at, created.created_at);

    assert!(repo.delete(&created.id).unwrap());
    assert!(repo.get_by_id(&created.id).unwrap().is_none());
    assert!(repo.list_all().unwrap().iter().all(|c| c.id != created.id));
}

#[test]
fn test_unknown_id_never_touches_the_file() {
    let (_dir, repo) = setup_repository();
    submit(&repo, &ContactDraft::new("John", "Doe", "", ""));
    let before = repo.list_all().unwrap();

    assert!(repo.get_by_id("nope").unwrap().is_none());
    assert!(repo
        .update("nope", ContactDraft::new("Jane", "Doe", "", ""))
        .unwrap()
        .is_none());
    assert!(!repo.delete("nope").unwrap());

    assert_eq!(repo.list_all().unwrap(), before);
}

#[test]
fn test_contacts_survive_reopening_the_store() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("contacts.json");

    let first = ContactRepository::new(ContactStore::open(&path).unwrap());
    let created = submit(&first, &ContactDraft::new("Grace", "Hopper", "", "Admiral"));

    let second = ContactRepository::new(ContactStore::open(&path).unwrap());
    assert_eq!(second.get_by_id(&created.id).unwrap(), Some(created));
}

#[test]
fn test_legacy_file_is_rewritten_with_canonical_names() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("contacts.json");
    std::fs::write(
        &path,
        r#"[
  {
    "fName": "Alan",
    "lName": "Turing",
    "email": "alan@example.com",
    "notes": "",
    "id": "generated-id-1700000000000",
    "createdAt": "2023-11-14T22:13:20.000Z",
    "updatedAt": "2023-11-14T22:13:20.000Z"
  }
]"#,
    )
    .unwrap();

    let repo = ContactRepository::new(ContactStore::open(&path).unwrap());
    let alan = repo
        .get_by_id("generated-id-1700000000000")
        .unwrap()
        .unwrap();
    assert_eq!(alan.first_name, "Alan");

    repo.create(ContactDraft::new("Joan", "Clarke", "", "")).unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    assert!(!raw.contains("fName"));
    assert!(raw.contains("\"firstName\": \"Alan\""));
    assert_eq!(repo.list_all().unwrap()[0].id, "generated-id-1700000000000");
}
