use crate::dates::{format_date, format_time};
use crate::models::{Adjustment, Patient};
use crate::sync::BoardView;

pub fn render_board(view: &BoardView) -> String {
    INDEX_HTML
        .replace("{{FILTER_LABEL}}", &filter_label(view))
        .replace("{{FILTER_BUTTONS}}", &filter_buttons(view))
        .replace("{{PATIENT_BLOCK}}", &patient_block(view.patient.as_ref()))
        .replace("{{NOTICES}}", &notices_block(&view.notices))
        .replace("{{PENDING_COUNT}}", &view.pending.len().to_string())
        .replace("{{COMPLETED_COUNT}}", &view.completed.len().to_string())
        .replace("{{TOMORROW_BANNER}}", &tomorrow_banner(view))
        .replace("{{TOMORROW_SECTION}}", &tomorrow_section(view))
        .replace("{{PENDING_LIST}}", &pending_list(&view.pending))
        .replace("{{COMPLETED_LIST}}", &completed_list(&view.completed))
}

fn escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn filter_label(view: &BoardView) -> String {
    match view.filter.as_str() {
        "all" => "All".to_string(),
        other => other.to_string(),
    }
}

fn filter_buttons(view: &BoardView) -> String {
    ["all", "Clicks", "Length"]
        .iter()
        .map(|value| {
            let class = if *value == view.filter.as_str() {
                "filter-btn active"
            } else {
                "filter-btn"
            };
            format!(
                "<form method=\"post\" action=\"/filter\">\
                 <input type=\"hidden\" name=\"method\" value=\"{value}\" />\
                 <button type=\"submit\" class=\"{class}\">{value}</button>\
                 </form>"
            )
        })
        .collect()
}

fn patient_block(patient: Option<&Patient>) -> String {
    let Some(patient) = patient else {
        return String::new();
    };
    format!(
        "<div class=\"patient\">\
         <p><b>Patient:</b> {}</p>\
         <p><b>Case ID:</b> {}</p>\
         <p><b>Description:</b> {}</p>\
         <p><b>Bone:</b> {}</p>\
         <p><b>Side:</b> {}</p>\
         </div>",
        escape(&patient.patient_id),
        escape(&patient.case_id),
        escape(&patient.case_description),
        escape(&patient.bone_type),
        escape(&patient.side),
    )
}

fn notices_block(notices: &[String]) -> String {
    if notices.is_empty() {
        return String::new();
    }
    let items: String = notices
        .iter()
        .map(|notice| format!("<p>⚠️ {}</p>", escape(notice)))
        .collect();
    format!("<div class=\"notices\">{items}</div>")
}

fn counters_line(row: &Adjustment) -> String {
    format!(
        "🔴 {} | 🟠 {} | 🟡 {} | 🟢 {} | 🔵 {} | 🟣 {}",
        row.red, row.orange, row.yellow, row.green, row.blue, row.purple
    )
}

fn tomorrow_banner(view: &BoardView) -> String {
    if view.tomorrow.is_empty() {
        return String::new();
    }
    format!(
        "<form method=\"post\" action=\"/tomorrow/toggle\">\
         <button type=\"submit\" class=\"banner\">\
         ⚠️ {} adjustments scheduled for tomorrow ({})\
         </button></form>",
        view.tomorrow.len(),
        filter_label(view),
    )
}

fn tomorrow_section(view: &BoardView) -> String {
    if !view.show_tomorrow {
        return String::new();
    }
    let body = if view.tomorrow.is_empty() {
        "<p class=\"empty\">No adjustments scheduled</p>".to_string()
    } else {
        let items: String = view
            .tomorrow
            .iter()
            .map(|row| {
                format!(
                    "<li class=\"card\">\
                     <div class=\"card-head\">\
                     <span class=\"when\">{} {}</span>\
                     <span class=\"method\">{}</span>\
                     </div>\
                     <p class=\"counters\">{}</p>\
                     </li>",
                    format_date(row.scheduled_at),
                    format_time(row.scheduled_at),
                    row.method,
                    counters_line(row),
                )
            })
            .collect();
        format!("<ul class=\"cards\">{items}</ul>")
    };
    format!(
        "<section class=\"tomorrow\">\
         <h2>Scheduled for tomorrow</h2>{body}</section>"
    )
}

fn pending_list(rows: &[Adjustment]) -> String {
    if rows.is_empty() {
        return "<p class=\"empty\">✅ No pending adjustments</p>".to_string();
    }
    rows.iter()
        .map(|row| {
            format!(
                "<div class=\"card\">\
                 <p class=\"when\">{}</p>\
                 <p class=\"method\">Method: {}</p>\
                 <p class=\"counters\">{}</p>\
                 <form method=\"post\" action=\"/complete/{}\">\
                 <button type=\"submit\" class=\"btn-done\">Confirm done</button>\
                 </form></div>",
                format_time(row.scheduled_at),
                row.method,
                counters_line(row),
                row.id,
            )
        })
        .collect()
}

fn completed_list(rows: &[Adjustment]) -> String {
    if rows.is_empty() {
        return "<p class=\"empty\">No adjustments confirmed yet</p>".to_string();
    }
    let items: String = rows
        .iter()
        .map(|row| {
            format!(
                "<li class=\"card done\">\
                 <div><span class=\"when\">{}</span>\
                 <span class=\"method\">Method: {}</span></div>\
                 <span class=\"check\">✅</span>\
                 </li>",
                format_time(row.scheduled_at),
                row.method,
            )
        })
        .collect();
    format!("<ul class=\"cards\">{items}</ul>")
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Adjustment Board</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&display=swap');

    :root {
      --bg-1: #eef2f8;
      --bg-2: #c9d8ef;
      --ink: #1f2b3a;
      --brand: #1e3a8a;
      --brand-soft: #27449c;
      --accent: #16a34a;
      --card: #ffffff;
      --shadow: 0 18px 48px rgba(30, 58, 138, 0.16);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #f6f8fc 70%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 28px 16px 44px;
    }

    .app {
      width: min(430px, 100%);
      background: var(--card);
      border-radius: 24px;
      box-shadow: var(--shadow);
      overflow: hidden;
      display: flex;
      flex-direction: column;
    }

    header {
      background: var(--brand);
      color: white;
      padding: 18px 16px;
      text-align: center;
    }

    header h1 {
      margin: 0;
      font-size: 1.15rem;
    }

    header .filter-name {
      font-size: 0.8rem;
      font-style: italic;
    }

    .patient {
      background: var(--brand-soft);
      border-radius: 12px;
      margin-top: 10px;
      padding: 10px;
      font-size: 0.78rem;
      text-align: left;
    }

    .patient p {
      margin: 2px 0;
    }

    .totals {
      display: flex;
      justify-content: space-between;
      font-size: 0.75rem;
      margin-top: 10px;
    }

    .banner {
      margin-top: 10px;
      width: 100%;
      background: none;
      border: none;
      color: #facc15;
      font-size: 0.78rem;
      font-weight: 600;
      text-decoration: underline;
      cursor: pointer;
    }

    .notices {
      background: #fef3c7;
      color: #92400e;
      font-size: 0.78rem;
      padding: 8px 14px;
    }

    .notices p {
      margin: 2px 0;
    }

    .filters {
      display: flex;
      justify-content: space-around;
      padding: 12px;
      background: #f8fafc;
      border-bottom: 1px solid #e2e8f0;
    }

    .filter-btn {
      border: 1px solid #cbd5e1;
      background: white;
      color: var(--ink);
      border-radius: 999px;
      padding: 8px 18px;
      font-size: 0.85rem;
      font-weight: 500;
      cursor: pointer;
    }

    .filter-btn.active {
      background: var(--brand);
      color: white;
      border-color: var(--brand);
    }

    main {
      padding: 16px;
      display: grid;
      gap: 22px;
    }

    h2 {
      font-size: 0.95rem;
      margin: 0 0 10px;
      color: #334155;
    }

    .cards {
      list-style: none;
      margin: 0;
      padding: 0;
      display: grid;
      gap: 10px;
    }

    .card {
      border: 1px solid #e2e8f0;
      border-radius: 16px;
      padding: 12px;
      background: white;
      box-shadow: 0 4px 14px rgba(30, 58, 138, 0.06);
      margin-bottom: 10px;
    }

    .card.done {
      display: flex;
      justify-content: space-between;
      align-items: center;
    }

    .card p {
      margin: 3px 0;
    }

    .when {
      font-weight: 600;
      font-size: 0.9rem;
    }

    .method {
      font-size: 0.75rem;
      font-style: italic;
      color: #64748b;
      display: block;
    }

    .counters {
      font-size: 0.85rem;
      color: #475569;
    }

    .check {
      color: var(--accent);
      font-size: 1.1rem;
    }

    .btn-done {
      margin-top: 8px;
      width: 100%;
      border: none;
      border-radius: 12px;
      padding: 10px;
      background: linear-gradient(90deg, var(--accent), var(--brand));
      color: white;
      font-weight: 600;
      cursor: pointer;
    }

    .tomorrow {
      background: #fefce8;
      border: 1px solid #fde68a;
      border-radius: 16px;
      padding: 12px;
    }

    .empty {
      text-align: center;
      color: #94a3b8;
      font-size: 0.85rem;
    }
  </style>
</head>
<body>
  <div class="app">
    <header>
      <h1>Adjustment Board</h1>
      <span class="filter-name">({{FILTER_LABEL}})</span>
      {{PATIENT_BLOCK}}
      <div class="totals">
        <span>⏳ Pending: {{PENDING_COUNT}}</span>
        <span>✅ Confirmed: {{COMPLETED_COUNT}}</span>
      </div>
      {{TOMORROW_BANNER}}
    </header>

    {{NOTICES}}

    <div class="filters">
      {{FILTER_BUTTONS}}
    </div>

    <main>
      {{TOMORROW_SECTION}}

      <section>
        <h2>Pending today</h2>
        {{PENDING_LIST}}
      </section>

      <section>
        <h2>Completed today</h2>
        {{COMPLETED_LIST}}
      </section>
    </main>
  </div>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Method;
    use chrono::{TimeZone, Utc};

    #[test]
    fn render_escapes_patient_free_text() {
        let view = BoardView {
            patient: Some(Patient {
                id: 1,
                patient_id: "P-9".to_string(),
                case_id: "C-9".to_string(),
                case_description: "<script>alert(1)</script>".to_string(),
                bone_type: "Femur".to_string(),
                side: "Right".to_string(),
                created_at: Utc::now(),
            }),
            ..Default::default()
        };

        let page = render_board(&view);
        assert!(!page.contains("<script>alert"));
        assert!(page.contains("&lt;script&gt;"));
    }

    #[test]
    fn render_shows_rows_with_utc_times() {
        let view = BoardView {
            pending: vec![Adjustment {
                id: 5,
                scheduled_at: Utc.with_ymd_and_hms(2026, 3, 7, 14, 30, 0).unwrap(),
                method: Method::Clicks,
                red: 1,
                orange: 0,
                yellow: 2,
                green: 0,
                blue: 0,
                purple: 3,
                completed: false,
            }],
            ..Default::default()
        };

        let page = render_board(&view);
        assert!(page.contains("14:30"));
        assert!(page.contains("/complete/5"));
        assert!(page.contains("⏳ Pending: 1"));
    }
}
