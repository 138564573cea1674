//! @acp:module "Extraction Pipeline"
//! @acp:summary "Turns an extraction request into a priced, tagged, described unit"
//! @acp:domain extraction
//! @acp:layer service

use serde::{Deserialize, Serialize};

use super::{extract_code, standaloneify};
use crate::classify::{classify_type, ComponentType};
use crate::config::ExtractionConfig;
use crate::error::{CarveError, Result};
use crate::metadata::{
    describe_component, suggest_price, synthesize_tags, DescriptionContext, DescriptionGenerator,
};

/// @acp:summary "Caller-supplied request to carve one component out of a template"
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,
    pub component_name: String,
    pub code: String,
    /// 1-indexed, inclusive; only honoured together with `end_line`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_line: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_line: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl ExtractionRequest {
    pub fn new(code: impl Into<String>, component_name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            component_name: component_name.into(),
            ..Default::default()
        }
    }

    /// Restrict extraction to an explicit line range
    pub fn with_lines(mut self, start_line: usize, end_line: usize) -> Self {
        self.start_line = Some(start_line);
        self.end_line = Some(end_line);
        self
    }

    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// @acp:summary "Reject requests the pipeline cannot act on"
    pub fn validate(&self) -> Result<()> {
        if self.code.trim().is_empty() {
            return Err(CarveError::MissingField("code"));
        }
        if self.component_name.trim().is_empty() {
            return Err(CarveError::MissingField("componentName"));
        }
        if let (Some(start), Some(end)) = (self.start_line, self.end_line) {
            if start == 0 || start > end {
                return Err(CarveError::InvalidLineRange { start, end });
            }
        }
        Ok(())
    }
}

/// @acp:summary "A standalone component ready to hand to persistence"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedUnit {
    pub name: String,
    pub code: String,
    pub component_type: ComponentType,
    pub description: String,
    pub tags: Vec<String>,
    pub price: u32,
}

/// @acp:summary "Runs extraction, classification and metadata synthesis"
pub struct Extractor {
    default_style: String,
    generator: Option<Box<dyn DescriptionGenerator>>,
}

impl Extractor {
    pub fn new(config: &ExtractionConfig) -> Self {
        Self {
            default_style: config.default_style.clone(),
            generator: None,
        }
    }

    /// Use an external collaborator for descriptions instead of the fixed template
    pub fn with_generator(mut self, generator: Box<dyn DescriptionGenerator>) -> Self {
        self.generator = Some(generator);
        self
    }

    /// @acp:summary "Extract one component with full marketplace metadata"
    pub fn extract(&self, request: &ExtractionRequest) -> Result<ExtractedUnit> {
        request.validate()?;

        let name = request.component_name.trim();
        let style = request
            .style
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(&self.default_style);

        let sliced = extract_code(&request.code, name, request.start_line, request.end_line);
        let code = standaloneify(&sliced, name);
        let component_type = classify_type(&code, name);

        let description = describe_component(
            self.generator.as_deref(),
            &DescriptionContext {
                code: &code,
                name,
                component_type,
                style,
                category: request.category.as_deref().filter(|c| !c.trim().is_empty()),
            },
        );
        let tags = synthesize_tags(component_type, style, &code);
        let price = suggest_price(component_type, &code);

        tracing::info!(
            "Extracted {} as {} ({} tags, ${})",
            name,
            component_type,
            tags.len(),
            price
        );

        Ok(ExtractedUnit {
            name: name.to_string(),
            code,
            component_type,
            description,
            tags,
            price,
        })
    }
}
