use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use dayhour_core::{render_stylesheet, FilterConfig, FilterState};
use dayhour_listings::parse_listings_str;

#[derive(Parser, Debug)]
#[command(
    name = "dayhour-cli",
    about = "In stylesheet lọc theo ngày/giờ và các nhà hàng còn hiển thị."
)]
struct Args {
    /// Đường dẫn tới file JSON listings.
    #[arg(short, long)]
    input: Option<PathBuf>,
    /// Token ngày (ví dụ: 1 cho thứ Hai); bỏ trống nghĩa là không lọc.
    #[arg(short, long, default_value = "")]
    day: String,
    /// Token giờ (ví dụ: 18); bỏ trống nghĩa là không lọc.
    #[arg(long, default_value = "")]
    hour: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let state = FilterState::new(args.day, args.hour);
    let rule = state.rule();

    let css = render_stylesheet(&rule, &FilterConfig::default());
    if css.is_empty() {
        println!("/* no filter */");
    } else {
        print!("{css}");
    }

    let Some(input) = args.input else {
        return Ok(());
    };
    let data = std::fs::read_to_string(&input)
        .with_context(|| format!("Không đọc được file {input:?}"))?;
    let listings = parse_listings_str(&data)?;

    println!();
    for restaurant in &listings.restaurants {
        let annotation = restaurant.annotation();
        let marker = if rule.matches(&annotation) { "+" } else { "-" };
        println!("{marker} {}  [{}]", restaurant.name, annotation.to_html_attributes());
    }

    Ok(())
}
