use crate::Result;
use crate::dashboard::Dashboard;
use core::fmt::Write;
use ohno::IntoAppError;

const HEADER: [&str; 7] = ["deployment_name", "prompt_template_name", "metric", "label", "value", "row", "column"];

/// Write one row per metric card; deployments without metrics contribute no rows.
pub fn generate<W: Write>(dashboard: &Dashboard, writer: &mut W) -> Result<()> {
    let mut csv_writer = csv::WriterBuilder::new().from_writer(Vec::new());
    csv_writer.write_record(HEADER).into_app_err("unable to write CSV header")?;

    for section in &dashboard.sections {
        let template = section.prompt_template_name.as_deref().unwrap_or_default();

        for card in &section.cards {
            let row = card.position.row.to_string();
            let column = card.position.column.to_string();
            csv_writer
                .write_record([
                    section.deployment_name.as_str(),
                    template,
                    card.key.as_str(),
                    card.label.as_str(),
                    card.value.as_str(),
                    row.as_str(),
                    column.as_str(),
                ])
                .into_app_err("unable to write CSV row")?;
        }
    }

    let bytes = csv_writer.into_inner().into_app_err("unable to flush CSV output")?;
    writer.write_str(&String::from_utf8(bytes).into_app_err("CSV output is not valid UTF-8")?)?;
    Ok(())
}
