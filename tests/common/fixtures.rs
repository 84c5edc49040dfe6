//! Test fixtures - reusable content constants for tests.

/// Manifest declaring one agent and one skill
pub const MANIFEST_AGENT_AND_SKILL: &str = r#"[agents]
helper = "org/repo/agents/helper.md@v1.0"

[skills]
review = "org/repo/skills/review@v2"
"#;

/// Manifest declaring only the helper agent
pub const MANIFEST_AGENT: &str = r#"[agents]
helper = "org/repo/agents/helper.md@v1.0"
"#;

/// Lock matching `MANIFEST_AGENT`, for a file containing `AGENT_BODY`
pub const LOCK_AGENT: &str = r#"{
  "version": 1,
  "entries": {
    "agents/helper": {
      "type": "agents",
      "name": "helper",
      "ref": "org/repo/agents/helper.md@v1.0",
      "resolved_sha": "0123456789abcdef0123456789abcdef01234567",
      "target_path": ".github/agents/helper.agent.md",
      "checksum": "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824",
      "synced_at": "2024-01-02T03:04:05Z"
    }
  }
}
"#;

/// Content whose SHA-256 is the checksum in `LOCK_AGENT`
pub const AGENT_BODY: &str = "hello";

pub const AGENT_TARGET: &str = ".github/agents/helper.agent.md";

pub const FAKE_SHA: &str = "0123456789abcdef0123456789abcdef01234567";
