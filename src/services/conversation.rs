use chrono::NaiveDate;

pub fn conversation_prompt(today: NaiveDate, message: &str) -> String {
    format!(
        "Today is {}.\nYou are a helpful AI assistant answering questions concisely and clearly.\n\n{}",
        today.format("%B %-d, %Y"),
        message
    )
}
