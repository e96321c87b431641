//! Plantilla HTML común y utilidades de presentación

use chrono::{DateTime, Utc};

/// Escapar texto para insertarlo en HTML (contenido y atributos)
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Etiqueta relativa de "última actualización" en minutos redondeados
pub fn time_ago(last_updated: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed_ms = (now - last_updated).num_milliseconds() as f64;
    let minutes = (elapsed_ms / 60_000.0).round() as i64;

    if minutes > 0 {
        format!("{} minutes ago", minutes)
    } else {
        "just now".to_string()
    }
}

/// Documento HTML completo con título y cuerpo ya renderizado
pub fn page(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<style>
body {{ font-family: system-ui, sans-serif; margin: 2rem auto; max-width: 60rem; padding: 0 1rem; }}
table {{ border-collapse: collapse; width: 100%; }}
th, td {{ border-bottom: 1px solid #ddd; padding: .4rem; text-align: left; vertical-align: top; }}
form.inline {{ display: inline; }}
</style>
</head>
<body>
<nav><a href="/vehicles">Vehicles</a> | <a href="/login">Connect vehicles</a></nav>
{body}
</body>
</html>
"#,
        title = escape_html(title),
        body = body
    )
}
