// rdsq-core/src/domain/contract.rs
//
// The fixed part of every call to the external command.

/// Executable resolved through PATH.
pub const DEFAULT_PROGRAM: &str = "aws";

/// Subcommand selector, always first.
pub const SUBCOMMAND: &str = "rds-data";

/// Action selector, always second.
pub const ACTION: &str = "execute-statement";

/// Forces `columnMetadata` into the response. Always third.
pub const INCLUDE_METADATA_FLAG: &str = "--include-result-metadata";

/// At least one caller argument must start with this.
pub const REQUIRED_FLAG: &str = "--sql";

pub const NO_RESULTS_MESSAGE: &str = "Command run successfully. No results to display.";

/// True when `args` carries the SQL flag (`--sql` or `--sql=...`).
pub fn has_required_flag(args: &[String]) -> bool {
    args.iter().any(|arg| arg.starts_with(REQUIRED_FLAG))
}

/// Full argument list handed to the launcher: the three fixed selectors
/// followed by the caller arguments in their original order.
pub fn compose_args(caller_args: &[String]) -> Vec<String> {
    let mut composed = Vec::with_capacity(caller_args.len() + 3);
    composed.push(SUBCOMMAND.to_string());
    composed.push(ACTION.to_string());
    composed.push(INCLUDE_METADATA_FLAG.to_string());
    composed.extend(caller_args.iter().cloned());
    composed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_required_flag_detection() {
        assert!(has_required_flag(&strings(&["--sql", "SELECT 1"])));
        assert!(has_required_flag(&strings(&["--database", "db", "--sql=SELECT 1"])));
        assert!(!has_required_flag(&strings(&["--database", "db"])));
        assert!(!has_required_flag(&[]));
        // A value mentioning the flag does not count, only a prefix does
        assert!(!has_required_flag(&strings(&["x--sql"])));
    }

    #[test]
    fn test_compose_args_prepends_fixed_selectors() {
        let composed = compose_args(&strings(&["--sql", "SELECT 1", "--resource-arn", "arn"]));
        assert_eq!(
            composed,
            strings(&[
                "rds-data",
                "execute-statement",
                "--include-result-metadata",
                "--sql",
                "SELECT 1",
                "--resource-arn",
                "arn",
            ])
        );
    }

    #[test]
    fn test_compose_args_keeps_caller_duplicates() {
        // The caller cannot remove or reorder the fixed selectors
        let composed = compose_args(&strings(&["execute-statement", "--sql", "x"]));
        assert_eq!(&composed[..3], &strings(&[SUBCOMMAND, ACTION, INCLUDE_METADATA_FLAG])[..]);
        assert_eq!(composed[3], "execute-statement");
    }
}
