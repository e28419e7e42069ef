//! Angular code generator.

use serde::Serialize;
use tracing::debug;

use super::templates::TemplateEngine;
use super::{effective_state, CodeGenerator};
use crate::error::Result;
use crate::naming::ComponentNaming;
use ngport_core::StateList;

/// Array field holding the todo items.
pub const STATE_FIELD: &str = "todos";
/// String field bound to the input element.
pub const INPUT_FIELD: &str = "newTodo";
/// Method that moves the pending input into the array.
pub const ADD_METHOD: &str = "addTodo";

const COMPONENT_TEMPLATE: &str = r#"import { Component } from '@angular/core';

@Component({
  selector: '{{selector}}',
  templateUrl: './{{template_file}}',
  styleUrls: ['./{{style_file}}']
})
export class {{class_name}} {
  {{state_field}}: string[] = [{{ts_string_array items}}];
  {{input_field}}: string = '';

  {{add_method}}() {
    if (this.{{input_field}}.trim()) {
      this.{{state_field}}.push(this.{{input_field}});
      this.{{input_field}} = '';
    }
  }
}
"#;

// Not rendered through Handlebars: `{{ todo }}` is Angular interpolation.
const TEMPLATE_HTML: &str = r#"<div>
  <h1>Todo List</h1>
  <ul>
    <li *ngFor="let todo of todos">{{ todo }}</li>
  </ul>
  <input [(ngModel)]="newTodo" type="text" />
  <button (click)="addTodo()">Add Todo</button>
</div>
"#;

#[derive(Serialize)]
struct ComponentContext<'s> {
    selector: String,
    template_file: String,
    style_file: String,
    class_name: String,
    state_field: &'static str,
    input_field: &'static str,
    add_method: &'static str,
    items: Vec<&'s str>,
}

/// Angular code generator.
pub struct AngularGenerator<'a> {
    engine: TemplateEngine<'a>,
    naming: ComponentNaming,
}

impl<'a> AngularGenerator<'a> {
    /// Create a generator for the default `TodoList` component.
    pub fn new() -> Self {
        Self::with_naming(ComponentNaming::default())
    }

    /// Create a generator using custom component names.
    pub fn with_naming(naming: ComponentNaming) -> Self {
        Self {
            engine: TemplateEngine::new(),
            naming,
        }
    }
}

impl<'a> Default for AngularGenerator<'a> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CodeGenerator for AngularGenerator<'a> {
    fn framework_name(&self) -> &'static str {
        "Angular"
    }

    fn naming(&self) -> &ComponentNaming {
        &self.naming
    }

    fn generate_component(&self, state: &StateList) -> Result<String> {
        if state.is_empty() {
            debug!("initial state is empty, using default items");
        }
        let context = ComponentContext {
            selector: self.naming.selector(),
            template_file: self.naming.template_file(),
            style_file: self.naming.style_file(),
            class_name: self.naming.class_name(),
            state_field: STATE_FIELD,
            input_field: INPUT_FIELD,
            add_method: ADD_METHOD,
            items: effective_state(state),
        };
        debug!(
            framework = self.framework_name(),
            class = %context.class_name,
            items = context.items.len(),
            "rendering component"
        );
        self.engine.render_string(COMPONENT_TEMPLATE, &context)
    }

    fn generate_template(&self) -> String {
        TEMPLATE_HTML.to_string()
    }
}
