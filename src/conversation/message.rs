use std::fmt;

/// Interactive affordance attached to a bot message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Widget {
    #[default]
    None,
    CourseOptions,
    Recommendation,
}

impl Widget {
    pub fn tag(&self) -> Option<&'static str> {
        match self {
            Widget::None => None,
            Widget::CourseOptions => Some("course options"),
            Widget::Recommendation => Some("recommendation"),
        }
    }
}

/// One entry of the chat transcript as the renderer sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayMessage {
    text: String,
    widget: Widget,
}

impl DisplayMessage {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            widget: Widget::None,
        }
    }

    pub fn with_widget(text: impl Into<String>, widget: Widget) -> Self {
        Self {
            text: text.into(),
            widget,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn widget(&self) -> Widget {
        self.widget
    }
}

impl fmt::Display for DisplayMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// A completion reply broken into what gets shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitReply {
    pub answer: String,
    pub segue: Option<String>,
}

/// Splits a completion reply on newlines.
///
/// Only a reply of exactly three segments carries a segue (the third one);
/// the middle segment is dropped. Any other shape yields the first segment
/// alone, so a two-line reply loses its second line.
pub fn split_reply(raw: &str) -> SplitReply {
    let segments: Vec<&str> = raw.split('\n').collect();

    let answer = segments[0].to_string();
    let segue = if segments.len() == 3 {
        Some(segments[2].to_string())
    } else {
        None
    };

    SplitReply { answer, segue }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_segment_is_the_answer() {
        let reply = split_reply("Answer text");
        assert_eq!(reply.answer, "Answer text");
        assert_eq!(reply.segue, None);
    }

    #[test]
    fn three_segments_drop_the_middle() {
        let reply = split_reply("Answer.\nMiddle.\nSegue.");
        assert_eq!(reply.answer, "Answer.");
        assert_eq!(reply.segue.as_deref(), Some("Segue."));
    }

    #[test]
    fn blank_middle_line_still_yields_segue() {
        let reply = split_reply("Answer.\n\nSegue.");
        assert_eq!(reply.segue.as_deref(), Some("Segue."));
    }

    #[test]
    fn two_segments_have_no_segue() {
        let reply = split_reply("Answer.\nSegue.");
        assert_eq!(reply.answer, "Answer.");
        assert_eq!(reply.segue, None);
    }

    #[test]
    fn four_segments_have_no_segue() {
        let reply = split_reply("A\nB\nC\nD");
        assert_eq!(reply.answer, "A");
        assert_eq!(reply.segue, None);
    }

    #[test]
    fn empty_reply_yields_empty_answer() {
        let reply = split_reply("");
        assert_eq!(reply.answer, "");
        assert_eq!(reply.segue, None);
    }

    #[test]
    fn widget_tags() {
        assert_eq!(Widget::None.tag(), None);
        assert_eq!(Widget::CourseOptions.tag(), Some("course options"));
        assert_eq!(Widget::Recommendation.tag(), Some("recommendation"));
        assert_eq!(DisplayMessage::new("hi").widget(), Widget::None);
    }
}
