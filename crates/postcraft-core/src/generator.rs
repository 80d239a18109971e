//! Fixed-template text generation.
//!
//! The long form is an Instagram caption built from one of two templates.
//! The short form for X is cut down from the long form, not rebuilt from the
//! description. Nothing here validates input: empty fields produce a text with
//! empty slots.

use crate::domain::{EventDescription, EventType, GeneratedTexts};

/// Lines of the long form kept at the head of the short form.
const SHORT_FORM_HEAD_LINES: usize = 5;

const ANNOUNCEMENT_HASHTAGS: &str = "#青春応援団我無沙羅 #応援合戦 #刈谷 #青春 #一生懸命";
const THANKS_HASHTAGS: &str = "#青春応援団我無沙羅 #応援合戦 #刈谷 #青春 #感謝";

/// Produce both texts for a description.
pub fn generate(description: &EventDescription) -> GeneratedTexts {
    let long_form = long_form(description);
    let short_form = short_form(&long_form);

    GeneratedTexts {
        long_form,
        short_form,
    }
}

/// Render the long-form text for the description's event type.
pub fn long_form(description: &EventDescription) -> String {
    let EventDescription {
        event_name,
        event_date,
        event_location,
        event_type,
        organizer_message,
    } = description;
    let name_tag = name_hashtag(event_name);

    match event_type {
        EventType::Announcement => format!(
            "🎌✨ イベント告知 ✨🎌\n\
             \n\
             【{event_name}】\n\
             \n\
             📅 日時：{event_date}\n\
             📍 場所：{event_location}\n\
             \n\
             {organizer_message}\n\
             \n\
             応援合戦の魅力を一緒に伝えませんか？\n\
             皆さまのご参加をお待ちしております！\n\
             \n\
             一生懸命はダサくない。\n\
             むしろこんなにもかっこいいんだってことを伝えたい。\n\
             \n\
             {ANNOUNCEMENT_HASHTAGS} {name_tag}"
        ),
        EventType::Thanks => format!(
            "🎌✨ ありがとうございました ✨🎌\n\
             \n\
             【{event_name}】\n\
             \n\
             📅 {event_date}\n\
             📍 {event_location}\n\
             \n\
             {organizer_message}\n\
             \n\
             皆さまのおかげで素晴らしいイベントとなりました。\n\
             応援合戦の魅力を少しでもお伝えできていれば幸いです。\n\
             \n\
             感動するほどの応援合戦を。\n\
             これからも一生懸命を大切に、活動を続けてまいります。\n\
             \n\
             {THANKS_HASHTAGS} {name_tag}"
        ),
    }
}

/// Cut a long-form text down to its first five non-blank lines plus its last
/// non-blank line (the hashtags), separated by a blank line.
///
/// Short inputs yield fewer head lines and the two slices may overlap.
pub fn short_form(long_form: &str) -> String {
    let lines: Vec<&str> = long_form
        .split('\n')
        .filter(|line| !line.trim().is_empty())
        .collect();

    let head = lines
        .iter()
        .take(SHORT_FORM_HEAD_LINES)
        .copied()
        .collect::<Vec<_>>()
        .join("\n");
    let hashtags = lines.last().copied().unwrap_or_default();

    format!("{head}\n\n{hashtags}")
}

/// `#` followed by the event name with every whitespace character removed.
fn name_hashtag(event_name: &str) -> String {
    let compact: String = event_name.chars().filter(|c| !c.is_whitespace()).collect();
    format!("#{compact}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn festival(event_type: EventType) -> EventDescription {
        EventDescription {
            event_name: "刈谷市民文化祭".to_string(),
            event_date: "2024年12月25日（水）14:00〜".to_string(),
            event_location: "刈谷市総合文化センター".to_string(),
            event_type,
            organizer_message: "よろしくお願いします".to_string(),
        }
    }

    #[test]
    fn test_announcement_long_form() {
        let text = long_form(&festival(EventType::Announcement));

        assert!(text.starts_with("🎌✨ イベント告知 ✨🎌\n\n【刈谷市民文化祭】\n"));
        assert!(text.contains("📅 日時：2024年12月25日（水）14:00〜\n"));
        assert!(text.contains("📍 場所：刈谷市総合文化センター\n"));
        assert!(text.contains("\nよろしくお願いします\n"));
        assert!(text.contains("皆さまのご参加をお待ちしております！"));

        let last = text.lines().last().unwrap();
        assert_eq!(
            last,
            "#青春応援団我無沙羅 #応援合戦 #刈谷 #青春 #一生懸命 #刈谷市民文化祭"
        );
    }

    #[test]
    fn test_thanks_long_form() {
        let text = long_form(&festival(EventType::Thanks));

        assert!(text.starts_with("🎌✨ ありがとうございました ✨🎌\n"));
        assert!(text.contains("📅 2024年12月25日（水）14:00〜\n"));
        assert!(text.contains("📍 刈谷市総合文化センター\n"));
        assert!(text.contains("皆さまのおかげで素晴らしいイベントとなりました。"));
        assert!(text.ends_with("#感謝 #刈谷市民文化祭"));
    }

    #[test]
    fn test_name_hashtag_strips_all_whitespace() {
        assert_eq!(name_hashtag("刈谷 市民\u{3000}文化祭\t2024"), "#刈谷市民文化祭2024");
    }

    #[test]
    fn test_short_form_from_generated_text() {
        let texts = generate(&festival(EventType::Announcement));

        assert_eq!(
            texts.short_form,
            "🎌✨ イベント告知 ✨🎌\n\
             【刈谷市民文化祭】\n\
             📅 日時：2024年12月25日（水）14:00〜\n\
             📍 場所：刈谷市総合文化センター\n\
             よろしくお願いします\n\
             \n\
             #青春応援団我無沙羅 #応援合戦 #刈谷 #青春 #一生懸命 #刈谷市民文化祭"
        );
    }

    #[test]
    fn test_short_form_skips_empty_message_line() {
        let mut desc = festival(EventType::Thanks);
        desc.organizer_message.clear();

        let short = generate(&desc).short_form;
        let head: Vec<&str> = short.split("\n\n").next().unwrap().lines().collect();

        assert_eq!(head.len(), 5);
        assert_eq!(head[4], "皆さまのおかげで素晴らしいイベントとなりました。");
    }

    #[test]
    fn test_short_form_slicing_rule() {
        let long = "a\n\n b \nc\n   \nd\ne\nf\ng\n\n#tags\n";
        assert_eq!(short_form(long), "a\n b \nc\nd\ne\n\n#tags");
    }

    #[test]
    fn test_short_form_with_few_lines_overlaps() {
        assert_eq!(short_form("one\n\ntwo"), "one\ntwo\n\ntwo");
        assert_eq!(short_form("only"), "only\n\nonly");
        assert_eq!(short_form(""), "\n\n");
    }

    #[test]
    fn test_generate_embeds_empty_fields() {
        let texts = generate(&EventDescription::default());
        assert!(texts.long_form.contains("【】"));
        assert!(texts.long_form.ends_with("#一生懸命 #"));
    }
}
