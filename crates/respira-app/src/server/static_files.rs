use axum::{
    http::{header, StatusCode, Uri},
    response::{Html, IntoResponse, Response},
};
use rust_embed::Embed;

#[derive(Embed)]
#[folder = "web/dist"]
struct WebAssets;

/// Serve embedded static files, falling back to the built-in form page
pub async fn serve_static(uri: Uri) -> Response {
    let path = uri.path().trim_start_matches('/');

    // Try exact path first
    if let Some(content) = <WebAssets as Embed>::get(path) {
        let mime = mime_guess::from_path(path).first_or_octet_stream();
        return (
            StatusCode::OK,
            [(header::CONTENT_TYPE, mime.as_ref())],
            content.data.into_owned(),
        )
            .into_response();
    }

    // A custom-built frontend, if one was bundled
    if let Some(content) = <WebAssets as Embed>::get("index.html") {
        return Html(String::from_utf8_lossy(&content.data).to_string()).into_response();
    }

    // Built-in single-page form
    Html(FALLBACK_HTML.to_string()).into_response()
}

const FALLBACK_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Asthma Risk Prediction System</title>
    <style>
        body {
            background-color: #f9f9f9;
            color: #222;
            font-family: "Segoe UI", Arial, sans-serif;
            margin: 0;
        }
        .container { max-width: 1100px; margin: 0 auto; padding: 24px; }
        .big-title {
            font-size: 42px;
            color: #003153;
            font-weight: bold;
            text-align: center;
            margin-top: 20px;
            margin-bottom: 10px;
        }
        .subtitle {
            font-size: 18px;
            text-align: center;
            color: #444;
            margin-bottom: 36px;
        }
        h3 { color: #003153; }
        .form-grid {
            display: grid;
            grid-template-columns: repeat(3, 1fr);
            gap: 14px 24px;
        }
        .field label { display: block; font-size: 14px; margin-bottom: 4px; }
        .field input {
            width: 100%;
            box-sizing: border-box;
            padding: 8px;
            border: 1px solid #ccc;
            border-radius: 6px;
            font-size: 15px;
        }
        button {
            font-size: 18px;
            background-color: #003366;
            color: white;
            border: none;
            border-radius: 10px;
            padding: 10px 20px;
            margin-top: 24px;
            cursor: pointer;
        }
        button:hover { background-color: #0059b3; }
        button:disabled { background-color: #888; cursor: wait; }
        .result-box {
            background-color: #ffffff;
            padding: 25px;
            border-radius: 15px;
            box-shadow: 0 0 12px rgba(0,0,0,0.1);
            margin-top: 24px;
            display: none;
        }
        .result-box h3 { margin-top: 0; }
        .confidence { font-size: 18px; }
        .error-notice {
            background-color: #fdecea;
            color: #7a1d13;
            border: 1px solid #f5c6c0;
            border-radius: 8px;
            padding: 14px;
            margin-top: 24px;
            display: none;
        }
    </style>
</head>
<body>
    <div class="container">
        <div class="big-title">Asthma Risk Prediction System</div>
        <div class="subtitle">Enter patient details below and get professional predictions with actionable insights</div>

        <h3>Patient Information Form</h3>
        <form id="patient-form">
            <div id="fields" class="form-grid"></div>
            <button id="run-btn" type="submit">Run Prediction</button>
        </form>

        <div id="error" class="error-notice"></div>

        <div id="result" class="result-box">
            <h3 id="verdict"></h3>
            <p id="confidence" class="confidence"></p>
            <h4 id="advice-heading"></h4>
            <ul id="advice"></ul>
        </div>
    </div>

    <script>
        const form = document.getElementById('patient-form');
        const fieldsEl = document.getElementById('fields');
        const resultEl = document.getElementById('result');
        const errorEl = document.getElementById('error');
        let fields = [];

        async function loadModel() {
            try {
                const res = await fetch('/api/model');
                const model = await res.json();
                fields = model.fields;
                renderFields();
            } catch (err) {
                showError('Failed to load model metadata: ' + err.message);
            }
        }

        function renderFields() {
            fieldsEl.innerHTML = '';
            fields.forEach((field, i) => {
                const wrap = document.createElement('div');
                wrap.className = 'field';

                const label = document.createElement('label');
                label.textContent = (i + 1) + '. ' + field.label;
                label.htmlFor = 'f-' + field.name;

                const input = document.createElement('input');
                input.type = 'number';
                input.id = 'f-' + field.name;
                input.name = field.name;
                input.min = field.min;
                input.max = field.max;
                input.step = 1;
                input.value = field.default;
                input.required = true;

                wrap.appendChild(label);
                wrap.appendChild(input);
                fieldsEl.appendChild(wrap);
            });
        }

        function showError(message) {
            resultEl.style.display = 'none';
            errorEl.textContent = 'Error during prediction. ' + message;
            errorEl.style.display = 'block';
        }

        function showResult(outcome) {
            errorEl.style.display = 'none';
            document.getElementById('verdict').textContent = outcome.verdict;
            document.getElementById('confidence').textContent =
                'Confidence: ' + outcome.confidence_pct.toFixed(2) + '%';
            document.getElementById('advice-heading').textContent = outcome.advice_heading;

            const list = document.getElementById('advice');
            list.innerHTML = '';
            outcome.advice.forEach(item => {
                const li = document.createElement('li');
                li.textContent = item;
                list.appendChild(li);
            });
            resultEl.style.display = 'block';
        }

        form.addEventListener('submit', async (e) => {
            e.preventDefault();
            const btn = document.getElementById('run-btn');
            btn.disabled = true;

            const row = {};
            fields.forEach(field => {
                row[field.name] = parseFloat(document.getElementById('f-' + field.name).value);
            });

            try {
                const res = await fetch('/api/predict', {
                    method: 'POST',
                    headers: { 'Content-Type': 'application/json' },
                    body: JSON.stringify(row)
                });
                const body = await res.json();
                if (res.ok) {
                    showResult(body);
                } else {
                    showError(body.detail || body.error || 'Please ensure all fields are correctly filled.');
                }
            } catch (err) {
                showError(err.message);
            } finally {
                btn.disabled = false;
            }
        });

        loadModel();
    </script>
</body>
</html>
"#;
