// rdsq/src/cli.rs
//
// Single source of truth for the CLI definition (Clap structs).
// Everything after the program name is handed to `aws rds-data execute-statement`
// untouched; only a leading --help / --version is answered here.

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "rdsq")]
#[command(
    about = "⚡ Runs `aws rds-data execute-statement` and prints the records as a table",
    long_about = None
)]
#[command(version)]
#[command(after_help = "Example:\n  rdsq --resource-arn <ARN> --secret-arn <ARN> --database app --sql \"SELECT * FROM users\"")]
pub struct Cli {
    /// Arguments for execute-statement (must include --sql)
    #[arg(
        value_name = "ARGS",
        num_args = 0..,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub args: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    #[test]
    fn test_cli_passes_flags_through_in_order() -> Result<()> {
        let cli = Cli::try_parse_from([
            "rdsq",
            "--resource-arn",
            "arn:aws:rds:eu-west-1:123:cluster:db",
            "--sql",
            "SELECT * FROM users",
            "--database",
            "app",
        ])?;
        assert_eq!(
            cli.args,
            vec![
                "--resource-arn",
                "arn:aws:rds:eu-west-1:123:cluster:db",
                "--sql",
                "SELECT * FROM users",
                "--database",
                "app",
            ]
        );
        Ok(())
    }

    #[test]
    fn test_cli_accepts_no_arguments() -> Result<()> {
        // The --sql check belongs to the invoker, not to clap
        let cli = Cli::try_parse_from(["rdsq"])?;
        assert!(cli.args.is_empty());
        Ok(())
    }

    #[test]
    fn test_cli_keeps_equals_form() -> Result<()> {
        let cli = Cli::try_parse_from(["rdsq", "--sql=SELECT 1"])?;
        assert_eq!(cli.args, vec!["--sql=SELECT 1"]);
        Ok(())
    }
}
