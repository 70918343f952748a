use chrono::NaiveDate;

/// en-US currency text: `$` prefix, comma grouping, at most three decimals.
pub fn format_currency(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let thousandths = (amount.abs() * 1000.0).round() as u64;
    let whole = group_thousands(thousandths / 1000);
    let fraction = thousandths % 1000;

    if fraction == 0 {
        format!("${}{}", sign, whole)
    } else {
        let digits = format!("{:03}", fraction);
        format!("${}{}.{}", sign, whole, digits.trim_end_matches('0'))
    }
}

pub fn format_money(amount: i64) -> String {
    format_currency(amount as f64)
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Short weekday, short month, day of month: `Sat, Oct 17`.
pub fn format_display_date(date: NaiveDate) -> String {
    date.format("%a, %b %-d").to_string()
}
