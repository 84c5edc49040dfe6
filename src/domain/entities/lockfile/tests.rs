use super::*;
use chrono::TimeZone;

fn at(secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(secs, 0).single().unwrap()
}

fn entry(asset_type: AssetType, name: &str, reference: &str) -> LockfileEntry {
    LockfileEntry::new(
        asset_type,
        name,
        reference,
        "abc123",
        format!(".github/{}/{}", asset_type, name),
        ContentHash::from_bytes(reference.as_bytes()),
        at(1_700_000_000),
    )
}

// === Creation ===

#[test]
fn lockfile_new_is_empty() {
    let lockfile = Lockfile::new();

    assert!(lockfile.is_empty());
    assert_eq!(lockfile.len(), 0);
    assert_eq!(lockfile.version(), 1);
}

// === Key Generation ===

#[test]
fn lockfile_make_key_format() {
    assert_eq!(Lockfile::make_key(AssetType::Agents, "helper"), "agents/helper");
    assert_eq!(
        Lockfile::make_key(AssetType::Skills, "my-skill"),
        "skills/my-skill"
    );
}

#[test]
fn lockfile_parse_key() {
    assert_eq!(
        Lockfile::parse_key("prompts/review"),
        Some((AssetType::Prompts, "review"))
    );
    assert!(Lockfile::parse_key("rules/x").is_none());
    assert!(Lockfile::parse_key("agents/").is_none());
    assert!(Lockfile::parse_key("no-slash").is_none());
}

// === Entry Operations ===

#[test]
fn lockfile_set_and_get() {
    let mut lockfile = Lockfile::new();
    lockfile.set(entry(AssetType::Agents, "helper", "org/repo/a@v1"));

    let found = lockfile.get(AssetType::Agents, "helper").unwrap();
    assert_eq!(found.reference(), "org/repo/a@v1");
    assert_eq!(found.resolved_sha(), "abc123");
    assert_eq!(found.key(), "agents/helper");
    assert!(lockfile.contains(AssetType::Agents, "helper"));
}

#[test]
fn lockfile_get_missing() {
    let lockfile = Lockfile::new();
    assert!(lockfile.get(AssetType::Agents, "nope").is_none());
}

#[test]
fn lockfile_set_replaces_whole_entry() {
    let mut lockfile = Lockfile::new();
    lockfile.set(entry(AssetType::Agents, "helper", "org/repo/a@v1"));

    let replacement = LockfileEntry::new(
        AssetType::Agents,
        "helper",
        "org/repo/a@v2",
        "def456",
        ".github/agents/helper.agent.md",
        ContentHash::from_bytes(b"new"),
        at(1_800_000_000),
    );
    let previous = lockfile.set(replacement.clone());

    assert_eq!(previous.unwrap().reference(), "org/repo/a@v1");
    assert_eq!(lockfile.get(AssetType::Agents, "helper"), Some(&replacement));
    assert_eq!(lockfile.len(), 1);
}

#[test]
fn same_name_different_type_are_distinct() {
    let mut lockfile = Lockfile::new();
    lockfile.set(entry(AssetType::Agents, "x", "org/repo/a@v1"));
    lockfile.set(entry(AssetType::Prompts, "x", "org/repo/b@v1"));

    assert_eq!(lockfile.len(), 2);
}

#[test]
fn lockfile_remove() {
    let mut lockfile = Lockfile::new();
    lockfile.set(entry(AssetType::Skills, "s", "org/repo/skills/s@v1"));

    let removed = lockfile.remove(AssetType::Skills, "s");
    assert_eq!(removed.unwrap().name(), "s");
    assert!(lockfile.is_empty());
}

#[test]
fn lockfile_remove_nonexistent() {
    let mut lockfile = Lockfile::new();
    assert!(lockfile.remove(AssetType::Skills, "missing").is_none());
}

// === Iteration ===

#[test]
fn lockfile_keys_are_sorted() {
    let mut lockfile = Lockfile::new();
    lockfile.set(entry(AssetType::Skills, "b", "org/repo/b@v1"));
    lockfile.set(entry(AssetType::Agents, "z", "org/repo/z@v1"));
    lockfile.set(entry(AssetType::Agents, "a", "org/repo/a@v1"));

    let keys: Vec<_> = lockfile.keys().collect();
    assert_eq!(keys, vec!["agents/a", "agents/z", "skills/b"]);
}

#[test]
fn unknown_revision_is_flagged() {
    let e = LockfileEntry::new(
        AssetType::Skills,
        "s",
        "org/repo/skills/s@v1",
        UNKNOWN_REVISION,
        ".github/skills/s",
        ContentHash::from_bytes(b""),
        at(0),
    );
    assert!(e.has_unknown_revision());
    assert!(!entry(AssetType::Agents, "a", "org/repo/a@v1").has_unknown_revision());
}
