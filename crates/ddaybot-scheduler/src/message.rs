//! Message templates and the inbound keyword mapping.
//!
//! Pure text in, text out. Keyword matching is case-insensitive and
//! bilingual (English / Thai).

use chrono::{NaiveDate, NaiveTime};

/// The daily push text.
pub fn daily_countdown(days_left: i64, target: NaiveDate) -> String {
    format!(
        "🎯 นับถอยหลัง D-Day!\n\n📅 เหลืออีก {days_left} วัน\nถึงวันที่ {}\n\n💪 Fighting!",
        target.format("%d/%m/%Y")
    )
}

/// Reply for an inbound "countdown" query.
pub fn countdown_reply(days_left: i64, target: NaiveDate) -> String {
    format!(
        "📊 เหลืออีก {days_left} วัน จนถึง D-Day!\n({})",
        target.format("%d/%m/%Y")
    )
}

/// Reply for an inbound "help" query.
pub fn help_reply(window_start: NaiveTime) -> String {
    format!(
        "คำสั่งที่ใช้ได้:\n• countdown - ดูวันที่เหลือ\n• help - ดูคำสั่ง\n\nบอทจะส่งข้อความอัตโนมัติทุกวัน {} น. 🎯",
        window_start.format("%H:%M")
    )
}

/// Default greeting for anything unrecognized.
pub fn greeting_reply() -> String {
    "สวัสดีครับ! พิมพ์ 'countdown' เพื่อดูวันที่เหลือ หรือ 'help' เพื่อดูคำสั่ง".to_string()
}

/// Map inbound chat text to a reply.
pub fn reply_for(text: &str, days_left: i64, target: NaiveDate, window_start: NaiveTime) -> String {
    let lowered = text.to_lowercase();
    if lowered.contains("countdown") || lowered.contains("นับ") {
        countdown_reply(days_left, target)
    } else if lowered.contains("help") || lowered.contains("ช่วย") {
        help_reply(window_start)
    } else {
        greeting_reply()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 28).unwrap()
    }

    fn nine() -> NaiveTime {
        NaiveTime::from_hms_opt(9, 0, 0).unwrap()
    }

    #[test]
    fn test_daily_countdown_contains_days_and_date() {
        let text = daily_countdown(27, target());
        assert!(text.contains("27"));
        assert!(text.contains("28/01/2026"));
    }

    #[test]
    fn test_countdown_keyword() {
        let reply = reply_for("countdown", 27, target(), nine());
        assert!(reply.contains("27"));
        assert!(reply.contains("28/01/2026"));
    }

    #[test]
    fn test_countdown_keyword_case_insensitive() {
        let reply = reply_for("CountDown please", 5, target(), nine());
        assert!(reply.contains('5'));
    }

    #[test]
    fn test_thai_countdown_keyword() {
        let reply = reply_for("นับถอยหลังหน่อย", 10, target(), nine());
        assert!(reply.contains("10"));
    }

    #[test]
    fn test_help_keyword() {
        let reply = reply_for("help", 27, target(), nine());
        assert!(reply.contains("countdown"));
        assert!(reply.contains("09:00"));
    }

    #[test]
    fn test_thai_help_keyword() {
        let reply = reply_for("ช่วยด้วย", 27, target(), nine());
        assert!(reply.contains("countdown"));
    }

    #[test]
    fn test_help_reflects_window_start() {
        let reply = reply_for("help", 27, target(), NaiveTime::from_hms_opt(7, 30, 0).unwrap());
        assert!(reply.contains("07:30"));
    }

    #[test]
    fn test_unknown_text_greets() {
        let reply = reply_for("hello there", 27, target(), nine());
        assert_eq!(reply, greeting_reply());
    }

    #[test]
    fn test_negative_days_still_render() {
        let text = daily_countdown(-3, target());
        assert!(text.contains("-3"));
    }
}
