use neuro_testing::TestWorld;

#[test]
fn test_help_lists_commands() {
    let result = TestWorld::new().run(&["--help"]).unwrap();
    assert!(result.success());
    for command in ["ls", "ps", "status", "top", "submit", "config"] {
        assert!(
            result.stdout().lines().any(|line| line.trim_start().starts_with(command)),
            "missing {} in help:\n{}",
            command,
            result.stdout()
        );
    }
}

#[test]
fn test_ps_help_mentions_format() {
    let result = TestWorld::new().run(&["ps", "--help"]).unwrap();
    assert!(result.success());
    assert!(result.stdout().contains("--format"));
    assert!(result.stdout().contains("--status"));
}

#[test]
fn test_unknown_status_is_rejected_by_parser() {
    let result = TestWorld::new().run(&["ps", "--status", "sleeping"]).unwrap();
    assert_eq!(result.status.code(), Some(2));
    assert!(result.stderr().contains("sleeping"));
}

#[test]
fn test_empty_workspace() {
    let world = TestWorld::new();

    let result = world.run(&["ps"]).unwrap();
    assert!(result.success());
    assert_eq!(result.lines()[0], "ID  NAME  STATUS  WHEN  IMAGE  DESCRIPTION  COMMAND");

    let result = world.run(&["ls"]).unwrap();
    assert!(!result.success());
    assert!(result.stderr().starts_with("Error: cannot access 'storage:'"));
}
