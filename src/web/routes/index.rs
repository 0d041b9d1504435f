use axum::{response::Html, Form};
use tracing::debug;
use crate::errors::PlagcheckError;
use crate::similarity;
use crate::web::models::CompareForm;
use crate::web::page;

pub async fn show_form() -> Html<String> {
    Html(page::render("", "", None))
}

pub async fn submit_form(
    Form(form): Form<CompareForm>,
) -> Result<Html<String>, PlagcheckError> {
    if !form.is_complete() {
        debug!("Blank input, re-rendering form without result");
        return Ok(Html(page::render(&form.text1, &form.text2, None)));
    }

    // The DP table is O(n*m); keep it off the async workers.
    let (text1, text2) = (form.text1.clone(), form.text2.clone());
    let result = tokio::task::spawn_blocking(move || similarity::compare(&text1, &text2))
        .await
        .map_err(|e| PlagcheckError::Internal(format!("Comparison task failed: {}", e)))??;

    debug!(lcs_len = result.lcs_len, score = result.score, "Compared texts");

    Ok(Html(page::render(&form.text1, &form.text2, Some(&result))))
}
