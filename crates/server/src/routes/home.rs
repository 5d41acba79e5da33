use axum::{http::StatusCode, response::Html};

const HOME_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>pathforge</title>
<style>
  body { margin: 0; min-height: 100vh; display: flex; align-items: center; justify-content: center;
         background-color: #f1f1f1; font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif; }
  main { max-width: 36rem; padding: 2rem; background: white; border-radius: 0.5rem;
         box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1); }
  code { background: #ede9fe; padding: 0 0.25rem; border-radius: 0.25rem; }
  form { display: flex; gap: 0.5rem; margin: 1rem 0; }
  input { flex: 1; padding: 0.5rem; border: 1px solid #ccc; border-radius: 0.375rem; }
  button { background-color: #6b46c1; color: white; font-weight: 600; border: none;
           padding: 0.5rem 1rem; border-radius: 0.375rem; cursor: pointer; }
  button:hover { background-color: #5a3fbf; }
  #status { color: #555; min-height: 1.5rem; }
</style>
</head>
<body>
<main>
  <h1>pathforge</h1>
  <p>Every path on this site is a file written on demand by a language model.
     Try <code>/coffee-shop</code>, <code>/api/planets.json</code> or <code>/themes/dark.css</code>.</p>
  <p>Generation uses your own OpenAI API key, kept in an HTTP-only cookie on this browser.</p>
  <form id="key-form">
    <input id="api-key" type="password" placeholder="sk-..." autocomplete="off" required>
    <button type="submit">Save key</button>
    <button type="button" id="forget">Forget</button>
  </form>
  <p id="status"></p>
</main>
<script>
  const status = document.getElementById('status');
  async function refresh() {
    const res = await fetch('/api/get-cookie');
    const { apiKey } = await res.json();
    status.textContent = apiKey ? 'A key is stored.' : 'No key stored yet.';
  }
  document.getElementById('key-form').addEventListener('submit', async (event) => {
    event.preventDefault();
    const apiKey = document.getElementById('api-key').value.trim();
    await fetch('/api/set-cookie', {
      method: 'POST',
      headers: { 'Content-Type': 'application/json' },
      body: JSON.stringify({ apiKey }),
    });
    document.getElementById('api-key').value = '';
    refresh();
  });
  document.getElementById('forget').addEventListener('click', async () => {
    await fetch('/api/delete-cookie', { method: 'DELETE' });
    refresh();
  });
  refresh();
</script>
</body>
</html>
"#;

/// GET / — landing page with the API key form.
pub async fn home() -> Html<&'static str> {
    Html(HOME_HTML)
}

/// GET /favicon.ico — answered locally, never generated.
pub async fn favicon() -> StatusCode {
    StatusCode::NO_CONTENT
}
