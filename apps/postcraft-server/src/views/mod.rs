//! Server-rendered HTML for the single page.
//!
//! The page is a header, two navigation tabs, an optional notice and either
//! the form (`creating`) or the post history (`browsing`).

mod form;
mod history;

use postcraft_core::domain::{Post, View, Workspace};

pub const COPY_SUCCEEDED: &str = "クリップボードにコピーしました";
pub const COPY_FAILED: &str = "コピーに失敗しました";
pub const POST_NOT_FOUND: &str = "投稿が見つかりません";

/// One-shot message shown above the content, in place of a browser alert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }
}

const STYLE: &str = "\
body{margin:0;background:#f9fafb;font-family:sans-serif;color:#111827}\
.container{max-width:56rem;margin:0 auto;padding:2rem 1rem}\
header{text-align:center;margin-bottom:2rem}\
nav{display:flex;justify-content:center;gap:.25rem;margin-bottom:2rem}\
nav form{margin:0}\
.tab{border:0;background:#fff;padding:.5rem 1.5rem;border-radius:.375rem;cursor:pointer}\
.tab.active{background:#3b82f6;color:#fff}\
.card{background:#fff;border-radius:.5rem;padding:1.5rem;margin-bottom:1rem}\
.grid{display:grid;grid-template-columns:1fr 1fr;gap:1rem}\
label{display:block;font-size:.875rem;margin-bottom:1rem}\
input,select,textarea{display:block;width:100%;box-sizing:border-box;padding:.5rem;margin-top:.5rem}\
.actions{text-align:center;margin:1rem 0}\
pre{white-space:pre-wrap;background:#f9fafb;padding:1rem;border-radius:.375rem}\
.badge{padding:.25rem .5rem;border-radius:9999px;font-size:.75rem}\
.badge.announcement{background:#dbeafe}.badge.thanks{background:#dcfce7}\
.notice{padding:.75rem 1rem;border-radius:.375rem;margin-bottom:1rem}\
.notice.success{background:#dcfce7}.notice.error{background:#fee2e2}\
.meta{font-size:.875rem;color:#6b7280}\
.empty{text-align:center;color:#6b7280}";

/// Render the whole page for the current workspace.
pub fn page(workspace: &Workspace, posts: &[Post], notice: Option<&Notice>) -> String {
    let content = match workspace.view() {
        View::Creating => form::render(workspace.draft(), workspace.preview()),
        View::Browsing => history::render(posts),
    };

    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"ja\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>我無沙羅 SNS投稿管理</title>\n\
         <style>{STYLE}</style>\n\
         </head>\n\
         <body>\n\
         <div class=\"container\">\n\
         <header>\n\
         <h1>我無沙羅 SNS投稿管理</h1>\n\
         <p>イベント告知・お礼投稿の文章作成と管理</p>\n\
         </header>\n\
         {nav}\
         {notice}\
         <main>\n{content}</main>\n\
         </div>\n\
         </body>\n\
         </html>\n",
        nav = navigation(workspace.view()),
        notice = notice.map(render_notice).unwrap_or_default(),
    )
}

fn navigation(current: View) -> String {
    let tabs: String = [View::Creating, View::Browsing]
        .into_iter()
        .map(|view| {
            let class = if view == current { "tab active" } else { "tab" };
            format!(
                "<form method=\"post\" action=\"/view/{}\"><button type=\"submit\" class=\"{}\">{}</button></form>\n",
                view.as_str(),
                class,
                view.label()
            )
        })
        .collect();

    format!("<nav>\n{tabs}</nav>\n")
}

fn render_notice(notice: &Notice) -> String {
    let class = match notice.kind {
        NoticeKind::Success => "success",
        NoticeKind::Error => "error",
    };
    format!(
        "<div class=\"notice {}\" role=\"alert\">{}</div>\n",
        class,
        escape(&notice.message)
    )
}

/// Escape text for use in element content and quoted attribute values.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use postcraft_core::domain::EventDescription;

    #[test]
    fn test_escape() {
        assert_eq!(
            escape("<b>\"祭\" & 'x'</b>"),
            "&lt;b&gt;&quot;祭&quot; &amp; &#39;x&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_page_marks_active_tab() {
        let html = page(&Workspace::new(), &[], None);
        assert!(html.contains("action=\"/view/creating\"><button type=\"submit\" class=\"tab active\">新規作成"));
        assert!(html.contains("action=\"/view/browsing\"><button type=\"submit\" class=\"tab\">投稿履歴"));
        assert!(html.contains("新規投稿作成"));
    }

    #[test]
    fn test_page_shows_notice() {
        let notice = Notice::error("イベント名、日時、場所を入力してください");
        let html = page(&Workspace::new(), &[], Some(&notice));
        assert!(html.contains(
            "<div class=\"notice error\" role=\"alert\">イベント名、日時、場所を入力してください</div>"
        ));
    }

    #[test]
    fn test_page_escapes_draft() {
        let ws = Workspace::new().with_draft(EventDescription {
            event_name: "<script>alert(1)</script>".to_string(),
            ..Default::default()
        });
        let html = page(&ws, &[], None);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
