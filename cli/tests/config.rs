//! # EduCírculos CLI Configuration Integration Tests
//!
//! File: cli/tests/config.rs
//!
//! Layered configuration as seen from the binary: `config check`, explicit
//! `--config` overrides, project files and rejected configurations.
//!

mod common;
use common::*;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_check_builtin_configuration() {
    edu_cmd()
        .args(["config", "check"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Configuration OK")
                .and(predicate::str::contains("1. greeting    hola, buenas"))
                .and(predicate::str::contains("7. help        ayuda, problema"))
                .and(predicate::str::contains("fallback: help"))
                .and(predicate::str::contains("Courses: 3")),
        );
}

#[test]
fn test_explicit_config_replaces_rules() {
    let dir = tempdir().unwrap();
    let path = write_config(
        dir.path(),
        "edu.toml",
        r#"
        [[assistant.rules]]
        category = "circles"
        triggers = ["equipo"]
        "#,
    );
    // "hola" no longer has a rule, so it falls back to help.
    edu_cmd()
        .args(["ask", "--show-category", "hola equipo", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("[circles] "));
    edu_cmd()
        .args(["ask", "--show-category", "hola", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("[help] "));
}

#[test]
fn test_config_from_environment_variable() {
    let dir = tempdir().unwrap();
    let path = write_config(
        dir.path(),
        "edu.toml",
        "[assistant.responses]\nhelp = [\"Escríbenos a soporte.\"]\n",
    );
    edu_cmd()
        .args(["ask", "xyz123"])
        .env("EDUCIRCULOS_CONFIG", &path)
        .assert()
        .success()
        .stdout("Escríbenos a soporte.\n");
}

#[test]
fn test_project_config_is_discovered() {
    let dir = tempdir().unwrap();
    std::fs::create_dir(dir.path().join(".git")).unwrap();
    write_config(
        dir.path(),
        ".educirculos.toml",
        "[assistant.responses]\ngreeting = [\"¡Saludos desde el proyecto!\"]\n",
    );
    edu_cmd()
        .current_dir(dir.path())
        .args(["ask", "hola"])
        .assert()
        .success()
        .stdout("¡Saludos desde el proyecto!\n");
}

#[test]
fn test_empty_pool_is_rejected_before_running() {
    let dir = tempdir().unwrap();
    let path = write_config(dir.path(), "edu.toml", "[assistant.responses]\ncredits = []\n");
    edu_cmd()
        .args(["ask", "hola", "--config"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "category 'credits' has an empty reply pool",
        ));
}

#[test]
fn test_unknown_rule_category_is_rejected() {
    let dir = tempdir().unwrap();
    let path = write_config(
        dir.path(),
        "edu.toml",
        "[[assistant.rules]]\ncategory = \"weather\"\ntriggers = [\"sol\"]\n",
    );
    edu_cmd()
        .args(["config", "check", "--config"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse TOML"));
}

#[test]
fn test_missing_explicit_config_fails() {
    edu_cmd()
        .args(["config", "check", "--config", "/nonexistent/educirculos.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read configuration file"));
}

#[cfg(target_os = "linux")]
#[test]
fn test_user_config_is_loaded() {
    let home = tempdir().unwrap();
    let user_file = user_config_path(home.path());
    std::fs::create_dir_all(user_file.parent().unwrap()).unwrap();
    std::fs::write(
        &user_file,
        "[assistant.responses]\ngreeting = [\"Hola desde el usuario.\"]\n",
    )
    .unwrap();

    edu_cmd_with_home(home.path())
        .args(["ask", "hola"])
        .assert()
        .success()
        .stdout("Hola desde el usuario.\n");
}

#[cfg(target_os = "linux")]
#[test]
fn test_layer_precedence_explicit_over_project_over_user() {
    let home = tempdir().unwrap();
    let user_file = user_config_path(home.path());
    std::fs::create_dir_all(user_file.parent().unwrap()).unwrap();
    std::fs::write(
        &user_file,
        "[assistant.responses]\ngreeting = [\"Hola desde el usuario.\"]\nhelp = [\"Ayuda del usuario.\"]\n",
    )
    .unwrap();

    let project = tempdir().unwrap();
    std::fs::create_dir(project.path().join(".git")).unwrap();
    write_config(
        project.path(),
        ".educirculos.toml",
        "[assistant.responses]\ngreeting = [\"Hola desde el proyecto.\"]\n",
    );

    // Project beats user for greeting; the user's help pool still applies.
    edu_cmd_with_home(home.path())
        .current_dir(project.path())
        .args(["ask", "hola"])
        .assert()
        .success()
        .stdout("Hola desde el proyecto.\n");
    edu_cmd_with_home(home.path())
        .current_dir(project.path())
        .args(["ask", "xyz123"])
        .assert()
        .success()
        .stdout("Ayuda del usuario.\n");

    // Explicit file beats both.
    let explicit_dir = tempdir().unwrap();
    let explicit = write_config(
        explicit_dir.path(),
        "edu.toml",
        "[assistant.responses]\ngreeting = [\"Hola desde --config.\"]\n",
    );
    edu_cmd_with_home(home.path())
        .current_dir(project.path())
        .args(["ask", "hola", "--config"])
        .arg(&explicit)
        .assert()
        .success()
        .stdout("Hola desde --config.\n");
}
