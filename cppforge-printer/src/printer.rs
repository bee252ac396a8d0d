//! Renderer registry and dispatcher.
//!
//! Renderers are registered per node kind, optionally narrowed to one
//! context kind. Resolution for a `(node, context)` pair is:
//!
//! 1. the group registered for the node's exact kind, and within it the
//!    renderer whose context kind equals the context's kind, else the
//!    group's context-free renderer; a group with neither is an error
//! 2. with fallback enabled and no group for the exact kind, the nearest
//!    registered supertype whose resolved renderer is fallback-eligible
//! 3. otherwise an unregistered-type error
//!
//! Registering the same `(kind, context)` pair twice is rejected.

use cppforge_ast::{NodeKind, NodeRef};
use indexmap::IndexMap;
use log::{debug, trace};

use crate::{Dispatch, Error, PrinterConfiguration, Render, Result};

/// Renderers registered for one node kind.
#[derive(Default)]
struct RendererGroup {
    default: Option<Box<dyn Render>>,
    contextual: IndexMap<NodeKind, Box<dyn Render>>,
}

impl RendererGroup {
    /// Exact context match first, then the context-free renderer.
    fn resolve(&self, context: Option<NodeKind>) -> Option<&dyn Render> {
        context
            .and_then(|kind| self.contextual.get(&kind))
            .or(self.default.as_ref())
            .map(|renderer| renderer.as_ref())
    }
}

/// The dispatch table and the configuration it prints with by default.
pub struct CodePrinter {
    groups: IndexMap<NodeKind, RendererGroup>,
    configuration: PrinterConfiguration,
    fallback: bool,
}

impl CodePrinter {
    /// An empty printer; fallback to supertype renderers is off.
    pub fn new(configuration: PrinterConfiguration) -> Self {
        Self {
            groups: IndexMap::new(),
            configuration,
            fallback: false,
        }
    }

    /// Allow or forbid fallback to supertype renderers.
    pub fn with_fallback(mut self, fallback: bool) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn fallback(&self) -> bool {
        self.fallback
    }

    pub fn configuration(&self) -> &PrinterConfiguration {
        &self.configuration
    }

    /// Register `renderer` for `kind`, optionally only when rendering from a
    /// `context` of the given kind.
    pub fn register(
        &mut self,
        renderer: impl Render + 'static,
        kind: NodeKind,
        context: Option<NodeKind>,
    ) -> Result<&mut Self> {
        let group = self.groups.entry(kind).or_default();
        let slot_taken = match context {
            Some(context) => group.contextual.contains_key(&context),
            None => group.default.is_some(),
        };
        if slot_taken {
            return Err(Error::ambiguous_registration(kind, context));
        }

        debug!(
            "registering {} for {kind} (context: {})",
            renderer.name(),
            context.map_or("any".to_string(), |c| c.to_string())
        );
        let renderer: Box<dyn Render> = Box::new(renderer);
        match context {
            Some(context) => {
                group.contextual.insert(context, renderer);
            }
            None => group.default = Some(renderer),
        }
        Ok(self)
    }

    /// Every registered `(kind, context)` pair with its renderer name, in
    /// registration order.
    pub fn registrations(&self) -> Vec<(NodeKind, Option<NodeKind>, &'static str)> {
        let mut out = Vec::new();
        for (kind, group) in &self.groups {
            if let Some(renderer) = &group.default {
                out.push((*kind, None, renderer.name()));
            }
            for (context, renderer) in &group.contextual {
                out.push((*kind, Some(*context), renderer.name()));
            }
        }
        out
    }

    /// Whether the renderer in the given slot accepts subtypes of its kind.
    pub fn is_fallback_handler(&self, kind: NodeKind, context: Option<NodeKind>) -> bool {
        let Some(group) = self.groups.get(&kind) else {
            return false;
        };
        let renderer = match context {
            Some(context) => group.contextual.get(&context),
            None => group.default.as_ref(),
        };
        renderer.is_some_and(|renderer| renderer.is_fallback_handler())
    }

    /// Render a root node with the printer's own configuration and no context.
    pub fn print<'a>(&self, node: impl Into<NodeRef<'a>>) -> Result<String> {
        self.render(node.into(), &self.configuration, None)
    }

    fn resolve_fallback(&self, kind: NodeKind, context: Option<NodeKind>) -> Option<&dyn Render> {
        for ancestor in kind.ancestors() {
            let Some(group) = self.groups.get(&ancestor) else {
                continue;
            };
            match group.resolve(context) {
                Some(renderer) if renderer.is_fallback_handler() => {
                    debug!("{kind} falls back to {} registered for {ancestor}", renderer.name());
                    return Some(renderer);
                }
                Some(renderer) => {
                    debug!(
                        "{} registered for {ancestor} does not accept subtypes",
                        renderer.name()
                    );
                }
                None => {}
            }
        }
        None
    }
}

impl Dispatch for CodePrinter {
    fn render(
        &self,
        node: NodeRef<'_>,
        configuration: &PrinterConfiguration,
        context: Option<NodeRef<'_>>,
    ) -> Result<String> {
        let kind = node.kind();
        let context_kind = context.map(|c| c.kind());

        let renderer = match self.groups.get(&kind) {
            Some(group) => group
                .resolve(context_kind)
                .ok_or_else(|| Error::unresolved_context(kind, context_kind))?,
            None if self.fallback => self
                .resolve_fallback(kind, context_kind)
                .ok_or_else(|| Error::unregistered_type(kind, node.name()))?,
            None => return Err(Error::unregistered_type(kind, node.name())),
        };

        trace!(
            "rendering {kind} with {} (context: {context_kind:?}, depth: {})",
            renderer.name(),
            configuration.depth()
        );
        renderer.render(self, node, configuration, context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cppforge_ast::{BasicType, Field, Function, StubType, TypeExpression, Variable};

    struct Fixed(&'static str, bool);

    impl Render for Fixed {
        fn render(
            &self,
            _printer: &dyn Dispatch,
            _node: NodeRef<'_>,
            _configuration: &PrinterConfiguration,
            _context: Option<NodeRef<'_>>,
        ) -> Result<String> {
            Ok(self.0.to_string())
        }

        fn is_fallback_handler(&self) -> bool {
            self.1
        }
    }

    fn printer() -> CodePrinter {
        CodePrinter::new(PrinterConfiguration::default())
    }

    #[test]
    fn test_exact_context_wins_over_default() {
        let mut p = printer();
        p.register(Fixed("default", false), NodeKind::StubType, None)
            .unwrap()
            .register(
                Fixed("in type", false),
                NodeKind::StubType,
                Some(NodeKind::TypeExpression),
            )
            .unwrap();

        let stub = StubType::new("x");
        let ty = TypeExpression::stub("y");
        let config = PrinterConfiguration::default();

        assert_eq!(p.print(&stub).unwrap(), "default");
        assert_eq!(
            p.render((&stub).into(), &config, Some((&ty).into())).unwrap(),
            "in type"
        );
        let other = Function::new("f");
        assert_eq!(
            p.render((&stub).into(), &config, Some(NodeRef::Function(&other)))
                .unwrap(),
            "default"
        );
    }

    #[test]
    fn test_duplicate_registration_rejected() {
        let mut p = printer();
        p.register(Fixed("a", false), NodeKind::Enum, None).unwrap();
        let err = p
            .register(Fixed("b", false), NodeKind::Enum, None)
            .err()
            .unwrap();
        assert!(matches!(
            *err,
            Error::AmbiguousRegistration {
                kind: NodeKind::Enum,
                context: None
            }
        ));

        p.register(Fixed("c", false), NodeKind::Enum, Some(NodeKind::Field))
            .unwrap();
        assert!(
            p.register(Fixed("d", false), NodeKind::Enum, Some(NodeKind::Field))
                .is_err()
        );
    }

    #[test]
    fn test_contextual_only_group_needs_exact_match() {
        let mut p = printer();
        p.register(
            Fixed("usage", false),
            NodeKind::StubType,
            Some(NodeKind::TypeExpression),
        )
        .unwrap();
        let err = p.print(&StubType::new("x")).unwrap_err();
        assert!(matches!(
            *err,
            Error::UnresolvedContext {
                kind: NodeKind::StubType,
                context: None
            }
        ));
    }

    #[test]
    fn test_unregistered_type() {
        let err = printer().print(&StubType::new("Widget")).unwrap_err();
        assert_eq!(err.to_string(), "no renderer registered for StubType 'Widget'");
    }

    #[test]
    fn test_fallback_requires_flag_and_eligibility() {
        let method = Function::new("run");
        let node = NodeRef::Method(&method);

        let mut p = printer();
        p.register(Fixed("function", true), NodeKind::Function, None)
            .unwrap();
        assert!(p.print(node).is_err());

        let p = p.with_fallback(true);
        assert_eq!(p.print(node).unwrap(), "function");

        let mut p = printer().with_fallback(true);
        p.register(Fixed("variable", false), NodeKind::Variable, None)
            .unwrap();
        let field = Field::new(TypeExpression::basic(BasicType::Int), "x");
        assert!(matches!(
            *p.print(&field).unwrap_err(),
            Error::UnregisteredType {
                kind: NodeKind::Field,
                ..
            }
        ));
    }

    #[test]
    fn test_fallback_prefers_nearest_supertype() {
        let mut p = printer().with_fallback(true);
        p.register(Fixed("function", true), NodeKind::Function, None)
            .unwrap()
            .register(Fixed("method", true), NodeKind::Method, None)
            .unwrap();
        let ctor = cppforge_ast::Constructor::new("A");
        assert_eq!(p.print(&ctor).unwrap(), "method");
    }

    #[test]
    fn test_registration_order_is_irrelevant_for_disjoint_kinds() {
        let var = Variable::new(TypeExpression::basic(BasicType::Int), "x");
        let stub = StubType::new("s");

        let mut a = printer();
        a.register(Fixed("v", false), NodeKind::Variable, None)
            .unwrap()
            .register(Fixed("s", false), NodeKind::StubType, None)
            .unwrap();
        let mut b = printer();
        b.register(Fixed("s", false), NodeKind::StubType, None)
            .unwrap()
            .register(Fixed("v", false), NodeKind::Variable, None)
            .unwrap();

        for p in [&a, &b] {
            assert_eq!(p.print(NodeRef::Variable(&var)).unwrap(), "v");
            assert_eq!(p.print(&stub).unwrap(), "s");
        }
    }

    #[test]
    fn test_registrations_listing() {
        let mut p = printer();
        p.register(Fixed("a", false), NodeKind::Enum, None)
            .unwrap()
            .register(Fixed("b", false), NodeKind::Enum, Some(NodeKind::TypeExpression))
            .unwrap();
        let kinds: Vec<_> = p.registrations().into_iter().map(|(k, c, _)| (k, c)).collect();
        assert_eq!(
            kinds,
            vec![
                (NodeKind::Enum, None),
                (NodeKind::Enum, Some(NodeKind::TypeExpression))
            ]
        );
    }

    #[test]
    fn test_fallback_handler_lookup() {
        let mut p = printer();
        p.register(Fixed("f", true), NodeKind::Function, None)
            .unwrap()
            .register(Fixed("u", false), NodeKind::Enum, Some(NodeKind::TypeExpression))
            .unwrap();
        assert!(p.is_fallback_handler(NodeKind::Function, None));
        assert!(!p.is_fallback_handler(NodeKind::Enum, Some(NodeKind::TypeExpression)));
        assert!(!p.is_fallback_handler(NodeKind::Enum, None));
        assert!(!p.is_fallback_handler(NodeKind::Class, None));
    }
}
