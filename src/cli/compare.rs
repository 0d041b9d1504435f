use crate::cli::commands::CompareArgs;
use crate::errors::PlagcheckError;
use crate::similarity::{self, Comparison};
use tracing::debug;

pub async fn handle_compare(args: CompareArgs) -> Result<(), PlagcheckError> {
    let (text1, text2) = if args.file {
        (
            tokio::fs::read_to_string(&args.text1).await?,
            tokio::fs::read_to_string(&args.text2).await?,
        )
    } else {
        (args.text1, args.text2)
    };

    let result = run_comparison(&text1, &text2)?;
    debug!(lcs_len = result.lcs_len, score = result.score, "Compared texts");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", format_comparison(&result));
    }

    Ok(())
}

/// Same blank-input rule as the web form, reported as an error here.
pub fn run_comparison(text1: &str, text2: &str) -> Result<Comparison, PlagcheckError> {
    if text1.trim().is_empty() {
        return Err(PlagcheckError::InvalidInput("Please enter text for Text 1".into()));
    }
    if text2.trim().is_empty() {
        return Err(PlagcheckError::InvalidInput("Please enter text for Text 2".into()));
    }
    similarity::compare(text1, text2)
}

pub fn format_comparison(result: &Comparison) -> String {
    format!(
        "LCS Length: {}\nLCS: {}\nSimilarity Score: {}\n",
        result.lcs_len,
        result.lcs_str,
        result.score_display(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_comparison() {
        let result = run_comparison("The cat sat", "The cat sat").unwrap();
        assert_eq!(result.lcs_len, 11);
    }

    #[test]
    fn test_blank_input_rejected() {
        let err = run_comparison("", "anything").unwrap_err();
        assert!(matches!(err, PlagcheckError::InvalidInput(_)));
        assert!(err.to_string().contains("Text 1"));

        let err = run_comparison("anything", "  ").unwrap_err();
        assert!(err.to_string().contains("Text 2"));
    }

    #[test]
    fn test_format_comparison() {
        let result = run_comparison("hello world", "world hello").unwrap();
        assert_eq!(
            format_comparison(&result),
            "LCS Length: 5\nLCS: world\nSimilarity Score: 45.45%\n"
        );
    }

    #[tokio::test]
    async fn test_compare_files() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.txt");
        let b = dir.path().join("b.txt");
        std::fs::write(&a, "One two").unwrap();
        std::fs::write(&b, "one, two!").unwrap();

        let args = CompareArgs {
            text1: a.display().to_string(),
            text2: b.display().to_string(),
            file: true,
            json: true,
        };
        assert!(handle_compare(args).await.is_ok());
    }

    #[tokio::test]
    async fn test_compare_missing_file() {
        let args = CompareArgs {
            text1: "/nonexistent/a.txt".into(),
            text2: "/nonexistent/b.txt".into(),
            file: true,
            json: false,
        };
        let err = handle_compare(args).await.unwrap_err();
        assert!(matches!(err, PlagcheckError::Io(_)));
    }
}
