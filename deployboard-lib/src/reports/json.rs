use crate::Result;
use crate::dashboard::{Dashboard, Section};
use core::fmt::Write;
use serde_json::json;

#[expect(unused_results, reason = "Map::insert intentionally overwrites values")]
pub fn generate<W: Write>(dashboard: &Dashboard, writer: &mut W) -> Result<()> {
    let mut root = serde_json::Map::new();
    root.insert("title".to_string(), json!(dashboard.title));
    root.insert("notices".to_string(), json!(dashboard.notices));
    root.insert(
        "deployments".to_string(),
        json!(dashboard.sections.iter().map(section_to_json).collect::<Vec<_>>()),
    );

    write!(writer, "{}", serde_json::to_string_pretty(&root)?)?;
    Ok(())
}

#[expect(unused_results, reason = "Map::insert intentionally overwrites values")]
fn section_to_json(section: &Section) -> serde_json::Value {
    let mut section_obj = serde_json::Map::new();
    section_obj.insert("deployment_name".to_string(), json!(section.deployment_name));
    section_obj.insert("prompt_template_name".to_string(), json!(section.prompt_template_name));
    section_obj.insert("grid_columns".to_string(), json!(section.layout.columns().get()));

    let metrics: Vec<serde_json::Value> = section
        .cards
        .iter()
        .map(|card| {
            json!({
                "key": card.key.as_str(),
                "label": card.label,
                "value": card.value,
                "row": card.position.row,
                "column": card.position.column,
            })
        })
        .collect();
    section_obj.insert("metrics".to_string(), json!(metrics));

    serde_json::Value::Object(section_obj)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::{Card, GridLayout, Notice, NoticeLevel};
    use core::num::NonZeroUsize;

    fn dashboard() -> Dashboard {
        let layout = GridLayout::new(NonZeroUsize::new(4).unwrap());
        Dashboard {
            title: "Deployments".into(),
            notices: vec![Notice::new(NoticeLevel::Info, "Displaying metrics for 2 deployments.")],
            sections: vec![
                Section {
                    deployment_name: "chat-prod".into(),
                    prompt_template_name: Some("summarize".into()),
                    cards: vec![Card {
                        key: "pii_input".into(),
                        label: "PII Input".into(),
                        value: "45.67%".into(),
                        position: layout.position(0),
                    }],
                    layout,
                },
                Section {
                    deployment_name: "chat-dev".into(),
                    prompt_template_name: None,
                    cards: Vec::new(),
                    layout,
                },
            ],
        }
    }

    #[test]
    fn test_generate_structure() {
        let mut output = String::new();
        generate(&dashboard(), &mut output).unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["title"], "Deployments");
        assert_eq!(parsed["notices"][0]["level"], "info");
        assert_eq!(parsed["notices"][0]["message"], "Displaying metrics for 2 deployments.");

        let deployments = parsed["deployments"].as_array().unwrap();
        assert_eq!(deployments.len(), 2);
        assert_eq!(deployments[0]["deployment_name"], "chat-prod");
        assert_eq!(deployments[0]["prompt_template_name"], "summarize");
        assert_eq!(deployments[0]["grid_columns"], 4);
        assert_eq!(deployments[0]["metrics"][0]["label"], "PII Input");
        assert_eq!(deployments[0]["metrics"][0]["value"], "45.67%");
        assert_eq!(deployments[0]["metrics"][0]["row"], 0);
        assert!(deployments[1]["prompt_template_name"].is_null());
        assert_eq!(deployments[1]["metrics"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn test_generate_keeps_field_order() {
        let mut output = String::new();
        generate(&dashboard(), &mut output).unwrap();

        let title = output.find("\"title\"").unwrap();
        let notices = output.find("\"notices\"").unwrap();
        let deployments = output.find("\"deployments\"").unwrap();
        assert!(title < notices && notices < deployments);
    }

    #[test]
    fn test_generate_empty() {
        let empty = Dashboard {
            title: "Deployments".into(),
            notices: Vec::new(),
            sections: Vec::new(),
        };

        let mut output = String::new();
        generate(&empty, &mut output).unwrap();
        insta::assert_snapshot!(output, @r#"
        {
          "title": "Deployments",
          "notices": [],
          "deployments": []
        }
        "#);
    }
}
