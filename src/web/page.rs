//! HTML for the comparison form.

use crate::similarity::Comparison;

const PAGE_HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Plagiarism Detection Tool</title>
    <script src="https://cdn.tailwindcss.com"></script>
    <style>
        body {
            background-image: url('https://images.unsplash.com/photo-1557683316-973673baf926?auto=format&fit=crop&w=1920&q=80');
            background-size: cover;
            background-attachment: fixed;
            background-position: center;
        }
        .error-message { display: none; color: #ef4444; }
        .card { backdrop-filter: blur(10px); background: rgba(255, 255, 255, 0.1); }
    </style>
</head>
<body class="min-h-screen flex items-center justify-center bg-gray-100">
    <div class="w-full max-w-3xl mx-auto p-6">
        <div class="card rounded-xl shadow-xl p-8 border border-gray-200">
            <h1 class="text-3xl font-bold text-center text-white mb-6">Plagiarism Detection Tool</h1>
            <form id="plagiarismForm" method="POST" class="space-y-4">
"#;

const FORM_BUTTONS: &str = r#"                <div class="flex space-x-4">
                    <button type="submit" class="w-full bg-indigo-600 text-white py-2 px-4 rounded-lg hover:bg-indigo-700 hover:scale-105 transition transform duration-200">Compare</button>
                    <button type="button" onclick="resetForm()" class="w-full bg-gray-500 text-white py-2 px-4 rounded-lg hover:bg-gray-600 hover:scale-105 transition transform duration-200">Clear</button>
                </div>
            </form>
"#;

const PAGE_TAIL: &str = r#"        </div>
    </div>
    <script>
        const form = document.getElementById('plagiarismForm');
        const text1 = document.getElementById('text1');
        const text2 = document.getElementById('text2');
        const text1Error = document.getElementById('text1Error');
        const text2Error = document.getElementById('text2Error');

        form.addEventListener('submit', (e) => {
            let valid = true;
            text1Error.style.display = 'none';
            text2Error.style.display = 'none';

            if (!text1.value.trim()) {
                text1Error.style.display = 'block';
                valid = false;
            }
            if (!text2.value.trim()) {
                text2Error.style.display = 'block';
                valid = false;
            }
            if (!valid) e.preventDefault();
        });

        function resetForm() {
            form.reset();
            text1Error.style.display = 'none';
            text2Error.style.display = 'none';
            window.location.href = '/';
        }
    </script>
</body>
</html>
"#;

/// Render the full page. `text1` and `text2` are echoed into the textareas as
/// entered; the result block appears only when `result` is present.
pub fn render(text1: &str, text2: &str, result: Option<&Comparison>) -> String {
    let mut html = String::with_capacity(PAGE_HEAD.len() + PAGE_TAIL.len() + 2048);
    html.push_str(PAGE_HEAD);
    html.push_str(&text_field("text1", "Text 1", "Enter first text", text1));
    html.push_str(&text_field("text2", "Text 2", "Enter second text", text2));
    html.push_str(FORM_BUTTONS);
    if let Some(result) = result {
        html.push_str(&result_block(result));
    }
    html.push_str(PAGE_TAIL);
    html
}

fn text_field(id: &str, label: &str, placeholder: &str, value: &str) -> String {
    format!(
        r#"                <div>
                    <label for="{id}" class="block text-sm font-medium text-white">{label}</label>
                    <textarea id="{id}" name="{id}" class="mt-1 w-full p-3 border rounded-lg focus:ring-2 focus:ring-indigo-500 focus:outline-none resize-y" rows="4" placeholder="{placeholder}" required>{value}</textarea>
                    <p id="{id}Error" class="error-message text-sm mt-1">Please enter text for {label}</p>
                </div>
"#,
        value = escape_html(value),
    )
}

fn result_block(result: &Comparison) -> String {
    format!(
        r#"            <div id="result" class="mt-6 p-6 bg-white rounded-lg shadow-md">
                <h2 class="text-xl font-semibold text-gray-800 mb-4">Results</h2>
                <p class="text-gray-700"><strong>LCS Length:</strong> {}</p>
                <p class="text-gray-700"><strong>LCS:</strong> {}</p>
                <p class="text-gray-700"><strong>Similarity Score:</strong> {}</p>
            </div>
"#,
        result.lcs_len,
        escape_html(&result.lcs_str),
        result.score_display(),
    )
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&#34;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
