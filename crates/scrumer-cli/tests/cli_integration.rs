use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::{tempdir, TempDir};

fn scrumer(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("scrumer").unwrap();
    cmd.env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path())
        .env_remove("SCRUMER_CONFIG")
        .env_remove("SCRUMER_DEBUG_LOG")
        .env_remove("GEMINI_API_KEY")
        .env_remove("API_KEY");
    cmd
}

fn parse_json_output(output: &str) -> Value {
    serde_json::from_str(output.trim()).expect("Failed to parse JSON output")
}

/// One JSON response per shell line that succeeded.
fn parse_json_lines(output: &[u8]) -> Vec<Value> {
    String::from_utf8_lossy(output)
        .lines()
        .filter(|l| l.starts_with('{'))
        .map(|l| serde_json::from_str(l).expect("Failed to parse JSON line"))
        .collect()
}

fn run(args: &[&str]) -> Value {
    let home = tempdir().unwrap();
    let output = scrumer(&home)
        .args(args)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let json = parse_json_output(&String::from_utf8_lossy(&output));
    assert!(json["success"].as_bool().unwrap());
    json
}

fn shell(script: &str) -> Vec<Value> {
    let home = tempdir().unwrap();
    let output = scrumer(&home)
        .write_stdin(script)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    parse_json_lines(&output)
}

fn keys(items: &Value) -> Vec<String> {
    items
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["key"].as_str().unwrap().to_string())
        .collect()
}

mod board_tests {
    use super::*;

    #[test]
    fn test_board_show_groups_active_sprint() {
        let json = run(&["board", "show"]);
        let board = &json["data"];

        assert_eq!(board["sprint"]["name"], "Genesis Cycle v1.0");
        let columns = board["columns"].as_array().unwrap();
        let titles: Vec<&str> = columns.iter().map(|c| c["title"].as_str().unwrap()).collect();
        assert_eq!(titles, vec!["TO DO", "IN PROGRESS", "IN REVIEW", "QA", "DONE"]);

        assert_eq!(keys(&columns[0]["cards"]), vec!["SCRUM-3"]);
        assert_eq!(keys(&columns[1]["cards"]), vec!["SCRUM-2"]);
        assert_eq!(columns[2]["count"], 0);
        assert_eq!(keys(&columns[4]["cards"]), vec!["SCRUM-1"]);
    }

    #[test]
    fn test_board_drag_onto_qa() {
        let json = run(&["board", "drag", "SCRUM-2", "--to", "qa"]);
        assert_eq!(json["data"]["key"], "SCRUM-2");
        assert_eq!(json["data"]["status"], "QA");
    }

    #[test]
    fn test_board_drag_skips_columns() {
        let json = run(&["board", "drag", "SCRUM-3", "--to", "done"]);
        assert_eq!(json["data"]["status"], "Done");
    }

    #[test]
    fn test_board_step_moves_one_column() {
        let json = run(&["board", "step", "SCRUM-2", "prev"]);
        assert_eq!(json["data"]["status"], "To Do");

        let json = run(&["board", "step", "SCRUM-2", "next"]);
        assert_eq!(json["data"]["status"], "Review");
    }

    #[test]
    fn test_board_step_past_done_fails() {
        let home = tempdir().unwrap();
        scrumer(&home)
            .args(["board", "step", "SCRUM-1", "next"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("cannot move further"));
    }

    #[test]
    fn test_board_drag_unknown_issue() {
        let home = tempdir().unwrap();
        scrumer(&home)
            .args(["board", "drag", "SCRUM-99", "--to", "qa"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Issue not found: SCRUM-99"));
    }

    #[test]
    fn test_board_reflects_shell_moves() {
        let responses = shell("board drag SCRUM-3 --to review\nboard show\n");
        let columns = responses[1]["data"]["columns"].as_array().unwrap();
        assert_eq!(columns[0]["count"], 0);
        assert_eq!(keys(&columns[2]["cards"]), vec!["SCRUM-3"]);
    }
}

mod issue_tests {
    use super::*;

    #[test]
    fn test_issue_create_joins_active_sprint() {
        let json = run(&["issue", "create", "--title", "New task"]);
        assert_eq!(json["data"]["key"], "SCRUM-5");
        assert_eq!(json["data"]["status"], "To Do");
        assert_eq!(json["data"]["priority"], "Medium");
        assert!(json["data"]["sprint_id"].is_string());
    }

    #[test]
    fn test_issue_create_in_backlog() {
        let json = run(&[
            "issue", "create", "--title", "Later", "--backlog", "--priority", "high", "--points", "3",
        ]);
        assert!(json["data"]["sprint_id"].is_null());
        assert_eq!(json["data"]["priority"], "High");
        assert_eq!(json["data"]["story_points"], 3);
    }

    #[test]
    fn test_issue_create_requires_title() {
        let home = tempdir().unwrap();
        scrumer(&home)
            .args(["issue", "create", "--title", "   "])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Issue title is required"));
    }

    #[test]
    fn test_issue_create_with_ai_falls_back_offline() {
        let json = run(&["issue", "create", "--title", "Add SSO", "--ai"]);
        assert_eq!(
            json["data"]["description"],
            "Failed to generate AI description. Please write manually."
        );
        assert_eq!(json["data"]["story_points"], 1);
    }

    #[test]
    fn test_issue_create_with_ai_requires_title() {
        let home = tempdir().unwrap();
        scrumer(&home)
            .args(["issue", "create", "--title", "", "--ai"])
            .assert()
            .failure()
            .stderr(predicate::str::contains(
                "A title is required for AI contextualization.",
            ));
    }

    #[test]
    fn test_issue_keys_not_reused_after_delete() {
        let responses = shell(
            "issue create --title First\nissue delete SCRUM-5\ny\nissue create --title Second\n",
        );
        assert_eq!(responses[0]["data"]["key"], "SCRUM-5");
        assert_eq!(responses[1]["data"]["decision"], "applied");
        assert_eq!(responses[2]["data"]["key"], "SCRUM-6");
    }

    #[test]
    fn test_issue_list_with_search() {
        let json = run(&["issue", "list", "--search", "scrum-2"]);
        assert_eq!(json["data"]["count"], 1);
        assert_eq!(keys(&json["data"]["items"]), vec!["SCRUM-2"]);
    }

    #[test]
    fn test_issue_get_includes_links() {
        let json = run(&["issue", "get", "SCRUM-1"]);
        let data = &json["data"];
        assert_eq!(data["key"], "SCRUM-1");
        assert_eq!(data["assignee_user"]["name"], "Alex Rivers");
        assert_eq!(data["linked_pull_requests"][0]["number"], 121);
        assert_eq!(data["linked_tests"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_issue_update_fields() {
        let json = run(&[
            "issue", "update", "SCRUM-3", "--assignee", "u4", "--priority", "highest",
        ]);
        assert_eq!(json["data"]["assignee"], "u4");
        assert_eq!(json["data"]["priority"], "Highest");

        let json = run(&["issue", "update", "SCRUM-1", "--unassign"]);
        assert!(json["data"]["assignee"].is_null());
    }

    #[test]
    fn test_issue_status_any_jump() {
        let json = run(&["issue", "status", "SCRUM-3", "done"]);
        assert_eq!(json["data"]["status"], "Done");
    }

    #[test]
    fn test_issue_delete_declined_without_input() {
        let json = run(&["issue", "delete", "SCRUM-1"]);
        assert_eq!(json["data"]["decision"], "declined");
    }

    #[test]
    fn test_issue_delete_with_yes() {
        let json = run(&["--yes", "issue", "delete", "SCRUM-1"]);
        assert_eq!(json["data"]["decision"], "applied");
    }

    #[test]
    fn test_shell_declined_delete_keeps_issue() {
        let responses = shell("issue delete SCRUM-2\nn\nissue list\n");
        assert_eq!(responses[0]["data"]["decision"], "declined");
        assert_eq!(responses[1]["data"]["count"], 4);
        assert!(keys(&responses[1]["data"]["items"]).contains(&"SCRUM-2".to_string()));
    }

    #[test]
    fn test_issue_move_sprint_and_back() {
        let responses = shell(
            "issue move-sprint SCRUM-4 --sprint 'Optimization Wave'\nbacklog list\nissue move-sprint SCRUM-2 --backlog\nbacklog list\n",
        );
        assert!(responses[0]["data"]["sprint_id"].is_string());
        assert_eq!(responses[1]["data"]["count"], 0);
        assert!(responses[2]["data"]["sprint_id"].is_null());
        assert_eq!(keys(&responses[3]["data"]["items"]), vec!["SCRUM-2"]);
    }

    #[test]
    fn test_issue_move_to_unknown_sprint() {
        let home = tempdir().unwrap();
        scrumer(&home)
            .args(["issue", "move-sprint", "SCRUM-4", "--sprint", "Nope"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Sprint not found"));
    }
}

mod backlog_tests {
    use super::*;

    #[test]
    fn test_backlog_lists_unscheduled() {
        let json = run(&["backlog", "list"]);
        assert_eq!(keys(&json["data"]["items"]), vec!["SCRUM-4"]);
    }

    #[test]
    fn test_backlog_search() {
        let json = run(&["backlog", "list", "--search", "AUTH"]);
        assert_eq!(json["data"]["count"], 1);

        let json = run(&["backlog", "list", "--search", "kanban"]);
        assert_eq!(json["data"]["count"], 0);
    }

    #[test]
    fn test_backlog_high_priority_filter() {
        let json = run(&["backlog", "list", "--filter", "high-priority"]);
        assert_eq!(json["data"]["count"], 0);
    }

    #[test]
    fn test_shell_quick_filters_are_exclusive() {
        let responses = shell(
            "backlog filter mine\nbacklog filter high-priority\nbacklog filter high-priority\n",
        );
        assert_eq!(responses[0]["data"]["query"]["quick_filter"], "mine");
        assert_eq!(responses[1]["data"]["query"]["quick_filter"], "high_priority");
        assert!(responses[2]["data"]["query"]["quick_filter"].is_null());
    }

    #[test]
    fn test_shell_search_applies_to_board() {
        let responses = shell("backlog search gemini\nboard show\nbacklog clear\n");
        let columns = responses[1]["data"]["columns"].as_array().unwrap();
        let total: u64 = columns.iter().map(|c| c["count"].as_u64().unwrap()).sum();
        assert_eq!(total, 1);
        assert_eq!(responses[2]["data"]["query"]["search"], "");
    }
}

mod sprint_tests {
    use super::*;

    #[test]
    fn test_sprint_list() {
        let json = run(&["sprint", "list"]);
        assert_eq!(json["data"]["count"], 2);
    }

    #[test]
    fn test_sprint_create_named() {
        let json = run(&["sprint", "create", "--name", "Sprint 3"]);
        assert_eq!(json["data"]["name"], "Sprint 3");
        assert_eq!(json["data"]["status"], "Planned");
        assert_eq!(json["data"]["goal"], "New sprint objectives");
    }

    #[test]
    fn test_sprint_create_empty_name_fails() {
        let home = tempdir().unwrap();
        scrumer(&home)
            .args(["sprint", "create", "--name", " "])
            .assert()
            .failure();
    }

    #[test]
    fn test_shell_sprint_prompt_empty_adds_nothing() {
        let responses = shell("sprint create\n\nsprint list\n");
        assert_eq!(responses[0]["data"]["created"], false);
        assert_eq!(responses[1]["data"]["count"], 2);
    }

    #[test]
    fn test_shell_sprint_prompt_named() {
        let responses = shell("sprint create\nHardening\nsprint list\n");
        assert_eq!(responses[0]["data"]["name"], "Hardening");
        assert_eq!(responses[1]["data"]["count"], 3);
    }

    #[test]
    fn test_shell_complete_sprint_moves_unfinished_to_backlog() {
        let responses = shell(
            "sprint complete active\ny\nissue get SCRUM-2\nissue get SCRUM-1\nboard show\n",
        );
        assert_eq!(responses[0]["data"]["decision"], "applied");
        assert_eq!(responses[0]["data"]["sprint"]["status"], "Closed");
        assert!(responses[1]["data"]["sprint_id"].is_null());
        assert!(responses[2]["data"]["sprint_id"].is_string());
        assert!(responses[3]["data"]["sprint"].is_null());
    }

    #[test]
    fn test_shell_complete_sprint_declined() {
        let responses = shell("sprint complete active\nn\nsprint get active\n");
        assert_eq!(responses[0]["data"]["decision"], "declined");
        assert_eq!(responses[1]["data"]["status"], "Active");
    }

    #[test]
    fn test_sprint_plan() {
        let json = run(&["sprint", "plan"]);
        let sprints = json["data"]["sprints"].as_array().unwrap();
        assert_eq!(sprints.len(), 2);
        assert_eq!(sprints[0]["issue_count"], 3);
        assert_eq!(sprints[0]["story_points"], 16);
        assert_eq!(keys(&json["data"]["backlog"]), vec!["SCRUM-4"]);
    }

    #[test]
    fn test_sprint_start() {
        let json = run(&["sprint", "start", "Optimization Wave"]);
        assert_eq!(json["data"]["status"], "Active");
    }
}

mod test_case_tests {
    use super::*;

    #[test]
    fn test_list_by_category() {
        let json = run(&["test", "list", "--category", "API"]);
        assert_eq!(keys(&json["data"]["items"]), vec!["TEST-2"]);

        let json = run(&["test", "list"]);
        assert_eq!(json["data"]["count"], 5);
    }

    #[test]
    fn test_create_test_case() {
        let json = run(&["test", "create", "--title", "Checkout flow", "--issue", "SCRUM-2"]);
        assert_eq!(json["data"]["key"], "TEST-6");
        assert_eq!(json["data"]["status"], "Draft");
        assert_eq!(json["data"]["linked_issue_key"], "SCRUM-2");
    }

    #[test]
    fn test_cycle_and_pass() {
        let responses = shell("test cycle TEST-1\ntest cycle TEST-1\ntest pass TEST-4\n");
        assert_eq!(responses[0]["data"]["status"], "Fail");
        assert_eq!(responses[1]["data"]["status"], "Blocked");
        assert_eq!(responses[2]["data"]["status"], "Pass");
    }

    #[test]
    fn test_linked_tests() {
        let json = run(&["test", "linked", "SCRUM-2"]);
        assert_eq!(json["data"]["count"], 2);
    }
}

mod pr_tests {
    use super::*;

    #[test]
    fn test_pr_list() {
        let json = run(&["pr", "list"]);
        assert_eq!(json["data"]["count"], 2);
        assert_eq!(json["data"]["items"][0]["number"], 124);
    }
}

mod ai_tests {
    use super::*;

    #[test]
    fn test_describe_without_key_uses_fallback() {
        let json = run(&["ai", "describe", "--title", "Add SSO"]);
        assert_eq!(
            json["data"]["description"],
            "Failed to generate AI description. Please write manually."
        );
        assert_eq!(json["data"]["points"], 1);
    }

    #[test]
    fn test_summarize_without_key_reports_error_text() {
        let json = run(&["ai", "summarize"]);
        assert_eq!(json["data"]["summary"], "Error generating summary.");
        assert_eq!(json["data"]["issue_count"], 4);
    }

    #[test]
    fn test_describe_requires_title() {
        let home = tempdir().unwrap();
        scrumer(&home)
            .args(["ai", "describe", "--title", "  "])
            .assert()
            .failure()
            .stderr(predicate::str::contains("A title is required"));
    }
}

mod config_tests {
    use super::*;

    #[test]
    fn test_config_file_sets_prefix_and_user() {
        let home = tempdir().unwrap();
        let path = home.path().join("custom.toml");
        fs::write(
            &path,
            "issue_key_prefix = \"PROJ\"\ncurrent_user = \"u2\"\n",
        )
        .unwrap();

        let output = scrumer(&home)
            .args(["--config", path.to_str().unwrap()])
            .write_stdin("issue create --title Task\nissue list --filter mine\n")
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();

        let responses = parse_json_lines(&output);
        assert_eq!(responses[0]["data"]["key"], "PROJ-5");
        assert_eq!(keys(&responses[1]["data"]["items"]), vec!["PROJ-2"]);
    }

    #[test]
    fn test_invalid_config_file_is_an_error() {
        let home = tempdir().unwrap();
        let path = home.path().join("broken.toml");
        fs::write(&path, "issue_key_prefix = [").unwrap();

        scrumer(&home)
            .args(["--config", path.to_str().unwrap(), "board", "show"])
            .assert()
            .failure();
    }
}

mod shell_tests {
    use super::*;

    #[test]
    fn test_shell_reports_bad_lines_and_continues() {
        let home = tempdir().unwrap();
        let assert = scrumer(&home)
            .write_stdin("bogus\nissue get SCRUM-77\npr list\n")
            .assert()
            .success()
            .stderr(predicate::str::contains("\"success\":false"))
            .stderr(predicate::str::contains("Issue not found: SCRUM-77"));

        let responses = parse_json_lines(&assert.get_output().stdout);
        assert_eq!(responses.len(), 1);
        assert_eq!(responses[0]["data"]["count"], 2);
    }

    #[test]
    fn test_shell_exit_stops_reading() {
        let responses = shell("pr list\nexit\npr list\n");
        assert_eq!(responses.len(), 1);
    }

    #[test]
    fn test_shell_skips_blank_and_comment_lines() {
        let responses = shell("\n# a comment\nsprint list\n");
        assert_eq!(responses.len(), 1);
    }
}

#[test]
fn test_completions() {
    let home = tempdir().unwrap();
    scrumer(&home)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("scrumer"));
}
