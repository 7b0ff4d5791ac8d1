use std::rc::Rc;

use crate::ast::MethodBody;
use crate::runtime::value::Closure;

/// A method attached to a class: name, formal parameters (excluding the
/// implicit `self`) and body.
#[derive(Debug, Clone, PartialEq)]
pub struct Method {
    name: String,
    formal_params: Vec<String>,
    body: MethodBody,
}

impl Method {
    pub fn new(name: String, formal_params: Vec<String>, body: MethodBody) -> Self {
        Self {
            name,
            formal_params,
            body,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn formal_params(&self) -> &[String] {
        &self.formal_params
    }

    pub fn body(&self) -> &MethodBody {
        &self.body
    }

    /// Number of positional arguments the method takes, excluding `self`.
    pub fn arity(&self) -> usize {
        self.formal_params.len()
    }
}

/// Immutable class descriptor with single inheritance. Shared between the
/// AST nodes that mention the class and every instance of it.
#[derive(Debug, Clone, PartialEq)]
pub struct Class {
    name: String,
    methods: Vec<Method>,
    parent: Option<Rc<Class>>,
}

impl Class {
    pub fn new(name: String, methods: Vec<Method>, parent: Option<Rc<Class>>) -> Self {
        Self {
            name,
            methods,
            parent,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Resolves a method by name, walking up the inheritance chain. The
    /// first name match wins even when its arity differs from the call.
    pub fn method(&self, name: &str) -> Option<&Method> {
        self.methods
            .iter()
            .find(|method| method.name() == name)
            .or_else(|| self.parent.as_deref().and_then(|parent| parent.method(name)))
    }
}

/// A runtime object: a reference to its class plus its own mutable fields.
#[derive(Debug, Clone)]
pub struct ClassInstance {
    class: Rc<Class>,
    fields: Closure,
}

impl ClassInstance {
    pub fn new(class: Rc<Class>) -> Self {
        Self {
            class,
            fields: Closure::new(),
        }
    }

    pub fn class(&self) -> &Rc<Class> {
        &self.class
    }

    pub fn fields(&self) -> &Closure {
        &self.fields
    }

    pub fn fields_mut(&mut self) -> &mut Closure {
        &mut self.fields
    }

    pub fn has_method(&self, name: &str, arity: usize) -> bool {
        matches!(self.class.method(name), Some(method) if method.arity() == arity)
    }
}
