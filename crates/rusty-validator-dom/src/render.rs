// File: src/render.rs
// Purpose: HTML rendering of the form document with its error decoration

use crate::field::{Field, FieldKind};
use crate::form::{ErrorList, HtmlForm};
use maud::{html, Markup, Render};

impl Render for HtmlForm {
    fn render(&self) -> Markup {
        html! {
            form id=[self.id.as_deref()] {
                @if let Some(list) = self.error_list() {
                    (list)
                }
                @for field in self.fields() {
                    (render_field(field))
                }
            }
        }
    }
}

impl Render for ErrorList {
    fn render(&self) -> Markup {
        let list = html! {
            div class=(self.class) {
                p { (self.heading) }
                ul {
                    @for item in &self.items {
                        li { (item) }
                    }
                }
            }
        };

        match &self.container {
            Some(container) => html! { div id=(container) { (list) } },
            None => list,
        }
    }
}

impl HtmlForm {
    /// Render the whole form to an HTML string
    pub fn to_html(&self) -> String {
        self.render().into_string()
    }
}

fn container_class(field: &Field) -> Option<String> {
    if field.state.container_classes.is_empty() {
        None
    } else {
        let classes: Vec<&str> = field
            .state
            .container_classes
            .iter()
            .map(String::as_str)
            .collect();
        Some(classes.join(" "))
    }
}

fn render_field(field: &Field) -> Markup {
    html! {
        p class=[container_class(field)] {
            @if let Some(label) = &field.label {
                label for=[field.id.as_deref()] { (label) }
            }
            @match field.kind {
                FieldKind::Select => {
                    select name=(field.name) id=[field.id.as_deref()] {
                        @for opt in &field.options {
                            option value=(opt.value) selected[opt.value == field.value] {
                                (opt.label)
                            }
                        }
                    }
                }
                FieldKind::Textarea => {
                    textarea name=(field.name) id=[field.id.as_deref()] { (field.value) }
                }
                _ => {
                    input type=(field.kind.type_attr()) name=(field.name) id=[field.id.as_deref()]
                        value=(field.value) checked[field.checked];
                }
            }
            @if let Some(error) = &field.state.inline_error {
                span class=(error.class) { (error.message) }
            }
        }
    }
}
