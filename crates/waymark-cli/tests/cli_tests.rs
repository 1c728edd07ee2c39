use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Small dataset with two zones in act 1 and a second act, written as a
/// poe2 override so the default settings pick it up.
const SMALL_DATASET: &str = r#"{
  "acts": [
    {
      "act_number": 1,
      "act_name": "Outskirts",
      "steps": [
        {
          "id": "town-a",
          "kind": "town",
          "zone": "Town",
          "zone_id": "z1",
          "description": "Enter town"
        },
        {
          "id": "town-b",
          "kind": "npc_quest",
          "zone": "Town",
          "zone_id": "z1",
          "description": "Talk to Willem"
        },
        {
          "id": "forest-c",
          "kind": "kill_boss",
          "zone": "Forest",
          "zone_id": "z2",
          "description": "Kill Brutus"
        }
      ]
    },
    {
      "act_number": 2,
      "act_name": "Hollow",
      "steps": [
        {
          "id": "hollow-a",
          "kind": "navigation",
          "zone": "Hollow",
          "description": "Explore Hollow"
        }
      ]
    }
  ]
}"#;

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Write the small dataset as a poe2 override into the test directory
fn write_small_dataset(dir: &TempDir) {
    std::fs::write(dir.path().join("poe2.json"), SMALL_DATASET)
        .expect("Failed to write dataset override");
}

/// Helper function to create a `wm` Command scoped to the test directory
fn wm_cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("wm").expect("Failed to find wm binary");
    cmd.arg("--no-color")
        .arg("--database-file")
        .arg(dir.path().join("cli_test.db"))
        .arg("--data-dir")
        .arg(dir.path());
    cmd
}

#[test]
fn test_cli_view_embedded_dataset() {
    let temp_dir = create_cli_test_environment();

    // No override file: the embedded poe2 dataset is used
    wm_cmd(&temp_dir)
        .arg("view")
        .assert()
        .success()
        .stdout(predicate::str::contains("Path of Exile 2"))
        .stdout(predicate::str::contains("Прогресс акта"));
}

#[test]
fn test_cli_view_groups_by_zone() {
    let temp_dir = create_cli_test_environment();
    write_small_dataset(&temp_dir);

    wm_cmd(&temp_dir)
        .arg("view")
        .assert()
        .success()
        .stdout(predicate::str::contains("# Path of Exile 2 • Act 1: Outskirts"))
        .stdout(predicate::str::contains("📍 Town (2 задачи)"))
        .stdout(predicate::str::contains("📍 Forest (1 задача)"))
        .stdout(predicate::str::contains("**Прогресс акта:** 0/3 (0%)"));
}

#[test]
fn test_cli_check_marks_step() {
    let temp_dir = create_cli_test_environment();
    write_small_dataset(&temp_dir);

    wm_cmd(&temp_dir)
        .args(["check", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[x] Войти в town"))
        .stdout(predicate::str::contains("**Прогресс акта:** 1/3 (33%)"));
}

#[test]
fn test_cli_check_position_out_of_range() {
    let temp_dir = create_cli_test_environment();
    write_small_dataset(&temp_dir);

    wm_cmd(&temp_dir)
        .args(["check", "9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No visible step at position 9"));
}

#[test]
fn test_cli_group_toggle_is_all_or_nothing() {
    let temp_dir = create_cli_test_environment();
    write_small_dataset(&temp_dir);

    // Both Town steps are unchecked; toggling the group checks them all
    wm_cmd(&temp_dir)
        .args(["group", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[x] 📍 Town (2 задачи)"))
        .stdout(predicate::str::contains("**Прогресс акта:** 2/3 (67%)"));

    // The remaining-only window now holds Forest alone
    wm_cmd(&temp_dir)
        .args(["group", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[x] 📍 Forest (1 задача)"))
        .stdout(predicate::str::contains("**Прогресс акта:** 3/3 (100%)"))
        .stdout(predicate::str::contains("Все задачи выполнены!"));
}

#[test]
fn test_cli_next_advances_window() {
    let temp_dir = create_cli_test_environment();
    write_small_dataset(&temp_dir);

    // Cursor 1 drops the first remaining step from the window
    wm_cmd(&temp_dir)
        .arg("next")
        .assert()
        .success()
        .stdout(predicate::str::contains("📍 Town (1 задача)"))
        .stdout(predicate::str::contains("📍 Forest (1 задача)"));
}

#[test]
fn test_cli_back_shows_completed_steps() {
    let temp_dir = create_cli_test_environment();
    write_small_dataset(&temp_dir);

    wm_cmd(&temp_dir).args(["check", "1"]).assert().success();

    // Backward navigation switches to the full list, checked steps included
    wm_cmd(&temp_dir)
        .arg("back")
        .assert()
        .success()
        .stdout(predicate::str::contains("[x]"))
        .stdout(predicate::str::contains("~~"))
        .stdout(predicate::str::contains("📍 Town (2 задачи)"));
}

#[test]
fn test_cli_act_switch() {
    let temp_dir = create_cli_test_environment();
    write_small_dataset(&temp_dir);

    wm_cmd(&temp_dir)
        .args(["act", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ Переключено на акт 2"))
        .stdout(predicate::str::contains("Act 2: Hollow"));
}

#[test]
fn test_cli_act_switch_unknown_act() {
    let temp_dir = create_cli_test_environment();
    write_small_dataset(&temp_dir);

    wm_cmd(&temp_dir)
        .args(["act", "99"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Act 99 not found"));
}

#[test]
fn test_cli_version_switch_resets_act() {
    let temp_dir = create_cli_test_environment();
    write_small_dataset(&temp_dir);

    wm_cmd(&temp_dir).args(["act", "2"]).assert().success();

    // poe1 has no override here, so the embedded dataset loads
    wm_cmd(&temp_dir)
        .args(["version", "poe1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ Переключено на Path of Exile 1"))
        .stdout(predicate::str::contains("# Path of Exile 1 • Act 1:"));

    wm_cmd(&temp_dir)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Версия игры: Path of Exile 1"))
        .stdout(predicate::str::contains("- Акт: 1"));
}

#[test]
fn test_cli_version_progress_is_isolated() {
    let temp_dir = create_cli_test_environment();
    write_small_dataset(&temp_dir);

    wm_cmd(&temp_dir).args(["check", "1"]).assert().success();
    wm_cmd(&temp_dir).args(["version", "poe1"]).assert().success();
    wm_cmd(&temp_dir).args(["version", "poe2"]).assert().success();

    // poe2 progress survived the round trip through poe1
    wm_cmd(&temp_dir)
        .arg("view")
        .assert()
        .success()
        .stdout(predicate::str::contains("**Прогресс акта:** 1/3 (33%)"));
}

#[test]
fn test_cli_config_shows_settings() {
    let temp_dir = create_cli_test_environment();
    write_small_dataset(&temp_dir);

    wm_cmd(&temp_dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("# Настройки"))
        .stdout(predicate::str::contains("Количество видимых шагов: 5"))
        .stdout(predicate::str::contains("Показывать подсказки: да"));
}

#[test]
fn test_cli_config_updates_window_size() {
    let temp_dir = create_cli_test_environment();
    write_small_dataset(&temp_dir);

    wm_cmd(&temp_dir)
        .args(["config", "--visible-steps", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ Настройки обновлены"))
        .stdout(predicate::str::contains("Количество видимых шагов: 2"));

    // Only two steps fit the window now
    wm_cmd(&temp_dir)
        .arg("view")
        .assert()
        .success()
        .stdout(predicate::str::contains("2. [ ]"))
        .stdout(predicate::str::contains("3. [ ]").not());
}

#[test]
fn test_cli_config_rejects_zero_window() {
    let temp_dir = create_cli_test_environment();
    write_small_dataset(&temp_dir);

    wm_cmd(&temp_dir)
        .args(["config", "--visible-steps", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("visible_steps"));
}

#[test]
fn test_cli_reset_requires_confirm() {
    let temp_dir = create_cli_test_environment();
    write_small_dataset(&temp_dir);

    wm_cmd(&temp_dir)
        .arg("reset")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--confirm"));
}

#[test]
fn test_cli_reset_clears_progress() {
    let temp_dir = create_cli_test_environment();
    write_small_dataset(&temp_dir);

    wm_cmd(&temp_dir).args(["check", "1"]).assert().success();

    wm_cmd(&temp_dir)
        .args(["reset", "--confirm"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ Прогресс сброшен"));

    wm_cmd(&temp_dir)
        .arg("view")
        .assert()
        .success()
        .stdout(predicate::str::contains("**Прогресс акта:** 0/3 (0%)"));
}

#[test]
fn test_cli_status_output() {
    let temp_dir = create_cli_test_environment();
    write_small_dataset(&temp_dir);

    wm_cmd(&temp_dir)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("# Статус"))
        .stdout(predicate::str::contains("Версия игры: Path of Exile 2"))
        .stdout(predicate::str::contains("всего актов: 2"))
        .stdout(predicate::str::contains("База данных:"));
}

#[test]
fn test_cli_help_output() {
    let temp_dir = create_cli_test_environment();

    wm_cmd(&temp_dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Waymark"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("view"))
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("status"));
}

#[test]
fn test_cli_version_output() {
    let temp_dir = create_cli_test_environment();

    wm_cmd(&temp_dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("wm "));
}

#[test]
fn test_cli_session_check_and_quit() {
    let temp_dir = create_cli_test_environment();
    write_small_dataset(&temp_dir);

    wm_cmd(&temp_dir)
        .write_stdin("check 1\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("wm> "))
        .stdout(predicate::str::contains("[x] Войти в town"))
        .stdout(predicate::str::contains("**Прогресс акта:** 1/3 (33%)"));
}

#[test]
fn test_cli_session_survives_bad_input() {
    let temp_dir = create_cli_test_environment();
    write_small_dataset(&temp_dir);

    wm_cmd(&temp_dir)
        .write_stdin("frobnicate\ncheck 9\nstatus\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Неизвестная команда: frobnicate"))
        .stdout(predicate::str::contains("✗"))
        .stdout(predicate::str::contains("# Статус"));
}

#[test]
fn test_cli_session_navigation_keeps_cursor() {
    let temp_dir = create_cli_test_environment();
    write_small_dataset(&temp_dir);

    // next drops the first remaining step; check 1 then toggles the second
    wm_cmd(&temp_dir)
        .write_stdin("next\ncheck 1\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("[x] Поговорить с Willem"));
}

#[test]
fn test_cli_session_ends_on_eof() {
    let temp_dir = create_cli_test_environment();
    write_small_dataset(&temp_dir);

    // No quit command; closing stdin must end the loop
    wm_cmd(&temp_dir)
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Прогресс акта"));
}
