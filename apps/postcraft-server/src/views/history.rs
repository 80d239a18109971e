//! The `browsing` view: saved posts, newest first, with copy actions.

use chrono::{DateTime, Local, Utc};
use postcraft_core::domain::{EventType, Post, TextKind};

use super::escape;

pub(super) fn render(posts: &[Post]) -> String {
    if posts.is_empty() {
        return "<section class=\"card empty\">\n\
                <p>まだ投稿がありません</p>\n\
                <p>「新規作成」から投稿を作成してみましょう</p>\n\
                </section>\n"
            .to_string();
    }

    let entries: String = posts.iter().map(render_post).collect();
    format!("<h2>投稿履歴</h2>\n{entries}")
}

fn render_post(post: &Post) -> String {
    let badge_class = match post.event.event_type {
        EventType::Announcement => "announcement",
        EventType::Thanks => "thanks",
    };

    let texts: String = TextKind::ALL
        .into_iter()
        .map(|kind| {
            format!(
                "<div>\n\
                 <h4>{label}</h4>\n\
                 <form method=\"post\" action=\"/posts/{id}/copy/{kind}\"><button type=\"submit\">コピー</button></form>\n\
                 <pre>{text}</pre>\n\
                 </div>\n",
                label = kind.label(),
                id = escape(post.id.as_str()),
                kind = kind.as_str(),
                text = escape(post.text(kind)),
            )
        })
        .collect();

    let message = if post.event.has_message() {
        format!(
            "<div>\n<h4>運営者メッセージ</h4>\n<p>{}</p>\n</div>\n",
            escape(&post.event.organizer_message)
        )
    } else {
        String::new()
    };

    format!(
        "<article class=\"card\">\n\
         <h3>{title} <span class=\"badge {badge_class}\">{badge}</span></h3>\n\
         <div class=\"meta\">{date} • {location}</div>\n\
         <div class=\"meta\">作成日時: {created}</div>\n\
         <div class=\"grid\">\n{texts}</div>\n\
         {message}\
         </article>\n",
        title = escape(&post.title),
        badge = post.event.event_type.label(),
        date = escape(&post.event.event_date),
        location = escape(&post.event.event_location),
        created = format_created_at(post.created_at),
    )
}

/// e.g. `2024年12月25日 14:00` in local time.
fn format_created_at(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local)
        .format("%Y年%-m月%-d日 %H:%M")
        .to_string()
}
