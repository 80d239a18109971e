//! The `creating` view: event form and generated preview.

use postcraft_core::domain::{EventDescription, EventType, GeneratedTexts, TextKind};

use super::escape;

pub(super) fn render(draft: &EventDescription, preview: Option<&GeneratedTexts>) -> String {
    let options: String = EventType::ALL
        .into_iter()
        .map(|event_type| {
            let selected = if event_type == draft.event_type { " selected" } else { "" };
            format!(
                "<option value=\"{}\"{}>{}</option>",
                event_type.as_str(),
                selected,
                event_type.option_label()
            )
        })
        .collect();

    format!(
        "<section class=\"card\">\n\
         <h2>新規投稿作成</h2>\n\
         <form method=\"post\" action=\"/generate\">\n\
         <div class=\"grid\">\n\
         <label>イベント名 *<input type=\"text\" name=\"eventName\" value=\"{name}\" placeholder=\"例：刈谷市民文化祭\"></label>\n\
         <label>投稿タイプ *<select name=\"eventType\">{options}</select></label>\n\
         </div>\n\
         <div class=\"grid\">\n\
         <label>日時 *<input type=\"text\" name=\"eventDate\" value=\"{date}\" placeholder=\"例：2024年12月25日（水）14:00〜\"></label>\n\
         <label>場所 *<input type=\"text\" name=\"eventLocation\" value=\"{location}\" placeholder=\"例：刈谷市総合文化センター\"></label>\n\
         </div>\n\
         <label>運営者からのメッセージ<textarea name=\"organizerMessage\" rows=\"4\" placeholder=\"イベントへの想いや参加者へのメッセージを入力してください\">{message}</textarea></label>\n\
         <div class=\"actions\"><button type=\"submit\" class=\"tab active\">SNS投稿文を生成</button></div>\n\
         {preview}\
         </form>\n\
         </section>\n",
        name = escape(&draft.event_name),
        date = escape(&draft.event_date),
        location = escape(&draft.event_location),
        message = escape(&draft.organizer_message),
        preview = preview.map(render_preview).unwrap_or_default(),
    )
}

/// Both texts plus the save button, which submits the same form to `/save`.
fn render_preview(texts: &GeneratedTexts) -> String {
    let blocks: String = TextKind::ALL
        .into_iter()
        .map(|kind| {
            format!(
                "<h3>{}</h3>\n<pre>{}</pre>\n",
                kind.label(),
                escape(texts.text(kind))
            )
        })
        .collect();

    format!(
        "<section class=\"preview\">\n\
         {blocks}\
         <div class=\"actions\"><button type=\"submit\" formaction=\"/save\" class=\"tab active\">保存する</button></div>\n\
         </section>\n"
    )
}
