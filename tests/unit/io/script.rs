//! Tests for edit script parsing and replay

#[cfg(test)]
mod tests {
    use blueprint_planner::PlannerError;
    use blueprint_planner::editor::{EditorSession, Notification, Tool};
    use blueprint_planner::io::script::{EditCommand, ScriptReport, parse_script, run_script};

    fn session(rows: usize, cols: usize) -> EditorSession<Vec<Notification>> {
        let mut session = EditorSession::new(Vec::new());
        session.start_new_project("Script", rows, cols);
        session
    }

    // Tests each command keyword parses to its gesture
    // Verified by swapping the click coordinates
    #[test]
    fn test_parse_commands() {
        let script = "tool fill\nblock stone\nclick 3 4\nselect 0 1 2 3\nfill-selection\n\
                      clear-selection\ncancel\nundo\nredo\nclear\n";
        let commands = parse_script(script).unwrap();

        assert_eq!(
            commands,
            vec![
                EditCommand::Tool(Tool::Fill),
                EditCommand::Block("stone".to_string()),
                EditCommand::Click { row: 3, col: 4 },
                EditCommand::Select {
                    from: (0, 1),
                    to: (2, 3),
                },
                EditCommand::FillSelection,
                EditCommand::ClearSelection,
                EditCommand::Cancel,
                EditCommand::Undo,
                EditCommand::Redo,
                EditCommand::Clear,
            ]
        );
    }

    // Tests comments and blank lines are skipped
    // Verified by parsing comment text as a command
    #[test]
    fn test_comments_and_blanks() {
        let script = "# header\n\n   \nclick 0 0  # place grass\n";
        assert_eq!(
            parse_script(script).unwrap(),
            vec![EditCommand::Click { row: 0, col: 0 }]
        );
    }

    // Tests parse errors name the offending line
    // Verified by counting only non-blank lines
    #[test]
    fn test_parse_error_line_numbers() {
        let script = "block stone\n\nclick 1\n";
        let result = parse_script(script);
        assert!(matches!(
            result,
            Err(PlannerError::Script { line: 3, .. })
        ));

        assert!(parse_script("jump 1 2").is_err());
        assert!(parse_script("click -1 2").is_err());
        assert!(parse_script("undo now").is_err());
        assert!(parse_script("tool paint").is_err());
    }

    // Tests replay applies gestures and counts grid changes
    // Verified by counting every command as an edit
    #[test]
    fn test_run_script_reports_edits() {
        let commands = parse_script(
            "block stone\nclick 0 0\nclick 0 0\nclick 0 1\nundo\ntool select\n\
             select 1 0 1 2\nfill-selection\n",
        )
        .unwrap();
        let mut session = session(2, 3);

        let report = run_script(&commands, &mut session);

        assert_eq!(
            report,
            ScriptReport {
                commands: 8,
                edits: 4,
            }
        );
        assert_eq!(session.grid().get(0, 0), Some("stone"));
        assert_eq!(session.grid().get(0, 1), None);
        assert_eq!(session.grid().get(1, 2), Some("stone"));
    }

    // Tests clear only counts as an edit when the grid had content
    // Verified by clearing without the confirmation check
    #[test]
    fn test_clear_command() {
        let mut session = session(2, 2);
        assert!(!EditCommand::Clear.apply(&mut session));

        EditCommand::Click { row: 0, col: 0 }.apply(&mut session);
        assert!(EditCommand::Clear.apply(&mut session));
        assert_eq!(session.total_area(), 0);
    }
}
