//! Annotation rendering shared by both dialects

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::config::DialectConfig;
use crate::content::{ContentFactory, Emitter, TextStyle, NBSP};
use crate::model::{Annotation, AnnotationValue, WithExtras};

/// Where the `@` sign is written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AtStrategy {
    /// At every nesting level
    Always,
    /// On the outermost annotation only
    OnlyOnce,
    Never,
}

impl AtStrategy {
    pub fn renders_at(self) -> bool {
        match self {
            AtStrategy::Always | AtStrategy::OnlyOnce => true,
            AtStrategy::Never => false,
        }
    }

    /// Strategy for annotations nested inside argument values
    pub fn nested(self) -> AtStrategy {
        match self {
            AtStrategy::Always => AtStrategy::Always,
            AtStrategy::OnlyOnce | AtStrategy::Never => AtStrategy::Never,
        }
    }
}

/// Dialect conventions for writing annotations
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotationStyle {
    pub strategy: AtStrategy,
    /// Opening and closing bracket of array values
    pub brackets: (char, char),
    /// Appended to class literal names (`::class`, `.class`)
    pub class_suffix: String,
    /// Annotations never shown, compared by identity and arguments
    pub ignored: Vec<Annotation>,
}

impl From<&DialectConfig> for AnnotationStyle {
    fn from(config: &DialectConfig) -> Self {
        Self {
            strategy: config.at_strategy,
            brackets: config.list_brackets,
            class_suffix: config.class_suffix.clone(),
            ignored: config.ignored_annotations.clone(),
        }
    }
}

impl AnnotationStyle {
    /// One block group per annotation, each on its own line
    pub fn block<F, A>(&self, out: &mut Emitter<'_, F>, annotated: &A)
    where
        F: ContentFactory,
        A: WithExtras + ?Sized,
    {
        for annotation in self.visible(annotated) {
            out.group(&[TextStyle::Block], |out| {
                self.render(out, annotation, self.strategy);
            });
        }
    }

    /// Annotations in the running text, each followed by a non-breaking space
    pub fn inline<F, A>(&self, out: &mut Emitter<'_, F>, annotated: &A)
    where
        F: ContentFactory,
        A: WithExtras + ?Sized,
    {
        for annotation in self.visible(annotated) {
            self.render(out, annotation, self.strategy);
            out.text(NBSP);
        }
    }

    /// Whether any annotation of `annotated` survives the ignore list
    pub fn any_visible<A: WithExtras + ?Sized>(&self, annotated: &A) -> bool {
        self.visible(annotated).next().is_some()
    }

    fn visible<'a, A>(&'a self, annotated: &'a A) -> impl Iterator<Item = &'a Annotation> + 'a
    where
        A: WithExtras + ?Sized,
    {
        annotated.annotations().iter().filter(|annotation| {
            let ignored = self.ignored.contains(annotation);
            if ignored {
                trace!(annotation = %annotation.id, "annotation suppressed");
            }
            !ignored
        })
    }

    pub fn render<F: ContentFactory>(
        &self,
        out: &mut Emitter<'_, F>,
        annotation: &Annotation,
        strategy: AtStrategy,
    ) {
        if strategy.renders_at() {
            out.text("@");
        }
        out.link(annotation.id.display_name(), &annotation.id);
        out.text("(");
        for (i, (name, value)) in annotation.params.iter().enumerate() {
            if i > 0 {
                out.text(", ");
            }
            out.text(&format!("{name} = "));
            self.render_value(out, value, strategy.nested());
        }
        out.text(")");
    }

    fn render_value<F: ContentFactory>(
        &self,
        out: &mut Emitter<'_, F>,
        value: &AnnotationValue,
        strategy: AtStrategy,
    ) {
        match value {
            AnnotationValue::String(text) => out.text(text),
            AnnotationValue::Enum { name, id } => out.link(name, id),
            AnnotationValue::Class { name, id } => {
                out.link(&format!("{name}{}", self.class_suffix), id);
            }
            AnnotationValue::Annotation(nested) => self.render(out, nested, strategy),
            AnnotationValue::Array(values) => {
                let (open, close) = self.brackets;
                out.text(open.encode_utf8(&mut [0; 4]));
                for (i, element) in values.iter().enumerate() {
                    if i > 0 {
                        out.text(", ");
                    }
                    self.render_value(out, element, strategy);
                }
                out.text(close.encode_utf8(&mut [0; 4]));
            }
        }
    }
}
