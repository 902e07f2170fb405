use tabled::settings::object::Rows;
use tabled::settings::{Color, Modify, Style};
use tabled::{builder::Builder, Table, Tabled};
use tadoku_core::model::catalog::language_name;
use tadoku_core::{day_key, AggregatedSeries, MediumDistribution, RegistrationOverview};

#[derive(Tabled)]
struct MediumRow {
    #[tabled(rename = "Medium")]
    medium: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Share")]
    share: String,
    #[tabled(rename = "Color")]
    color: String,
}

#[derive(Tabled)]
struct RegistrationRow {
    #[tabled(rename = "Language")]
    language: String,
    #[tabled(rename = "Code")]
    code: String,
    #[tabled(rename = "Score")]
    amount: String,
}

fn styled(mut table: Table) -> Table {
    table
        .with(Style::modern())
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN)); // Header color
    table
}

pub fn show_activity(activity: &AggregatedSeries) {
    if activity.series.is_empty() {
        println!("No reading activity found.");
        return;
    }

    // One row per day, one column per language (legend order)
    let mut builder = Builder::default();
    let mut header = vec!["Date".to_string()];
    header.extend(activity.legend.iter().map(|l| l.label.clone()));
    builder.push_record(header);

    let days = activity.series[0].points.len();
    for i in 0..days {
        let mut row = vec![day_key(activity.series[0].points[i].date)];
        for series in &activity.series {
            let value = series.points[i].value;
            row.push(if value > 0.0 { format!("{:.1}", value) } else { "-".to_string() });
        }
        builder.push_record(row);
    }

    let mut totals = vec!["Total".to_string()];
    for series in &activity.series {
        let total: f64 = series.points.iter().map(|p| p.value).sum();
        totals.push(format!("{:.1}", total));
    }
    builder.push_record(totals);

    println!("{}", styled(builder.build()));
}

pub fn show_media(media: &MediumDistribution) {
    if media.entries.is_empty() {
        println!("No reading activity found.");
        return;
    }

    let rows: Vec<MediumRow> = media
        .entries
        .iter()
        .map(|e| MediumRow {
            medium: e.medium_label.clone(),
            amount: format!("{:.1}", e.amount),
            share: if media.total_amount > 0.0 {
                format!("{:.0}%", e.amount / media.total_amount * 100.0)
            } else {
                "-".to_string()
            },
            color: e.color.clone(),
        })
        .collect();

    println!("{}", styled(Table::new(rows)));
    println!("Total: {:.1}", media.total_amount);
}

pub fn show_overview(overview: &RegistrationOverview) {
    println!(
        "\x1b[1;36m{}\x1b[0m (user {}, contest {})",
        overview.user_display_name, overview.user_id, overview.contest_id
    );

    let rows: Vec<RegistrationRow> = overview
        .registrations
        .iter()
        .map(|r| RegistrationRow {
            language: language_name(&r.language_code),
            code: r.language_code.clone(),
            amount: format!("{:.1}", r.amount),
        })
        .collect();

    println!("{}", styled(Table::new(rows)));
}
