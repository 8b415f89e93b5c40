//! Normalized declaration nodes extracted from a parsed source file.
//!
//! The extractor walks a `syn` AST once per file and emits one
//! [`SyntaxNode`] per declaration, carrying only the byte-range metadata
//! span rules need. All span-to-offset conversion happens here, so rules
//! downstream never touch the AST or perform unchecked lookups.

use crate::line_index::LineIndex;
use syn::visit::Visit;

/// Syntactic category of a declaration node.
///
/// Closed enumeration; rules match against it exhaustively rather than
/// probing string keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclarationKind {
    /// A `struct` declaration.
    Struct,
    /// An `enum` declaration.
    Enum,
    /// A `union` declaration.
    Union,
    /// A `trait` declaration.
    Trait,
    /// An `impl` block.
    Impl,
    /// A free function, inherent method, or trait method.
    Function,
    /// An inline or declared module.
    Module,
}

/// One parsed declaration with its byte-range metadata.
///
/// The body fields are absent for bodyless declarations (unit structs,
/// trait method stubs, `mod name;`). Absence means the declaration is not
/// checked by span rules; it is never treated as a zero-length body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxNode {
    /// Syntactic category of this declaration.
    pub kind: DeclarationKind,
    /// Byte offset of the declaration's name or keyword.
    pub declaration_offset: Option<usize>,
    /// Byte offset just past the body's opening delimiter.
    pub body_start_offset: Option<usize>,
    /// Byte length from the body start up to the closing delimiter.
    pub body_length: Option<usize>,
}

impl SyntaxNode {
    /// Creates a node with no resolved metadata.
    #[must_use]
    pub fn new(kind: DeclarationKind) -> Self {
        Self {
            kind,
            declaration_offset: None,
            body_start_offset: None,
            body_length: None,
        }
    }

    /// Sets the declaration offset.
    #[must_use]
    pub fn with_declaration_offset(mut self, offset: usize) -> Self {
        self.declaration_offset = Some(offset);
        self
    }

    /// Sets the body byte range.
    #[must_use]
    pub fn with_body(mut self, start_offset: usize, length: usize) -> Self {
        self.body_start_offset = Some(start_offset);
        self.body_length = Some(length);
        self
    }

    /// Returns true when both body fields are present.
    #[must_use]
    pub fn has_body(&self) -> bool {
        self.body_start_offset.is_some() && self.body_length.is_some()
    }
}

/// Extracts all declaration nodes from a parsed file.
///
/// The `index` must have been built from the same contents the AST was
/// parsed from; it converts the parser's line/column spans into byte
/// offsets.
#[must_use]
pub fn extract_declarations(ast: &syn::File, index: &LineIndex) -> Vec<SyntaxNode> {
    let mut visitor = DeclVisitor {
        index,
        nodes: Vec::new(),
    };
    visitor.visit_file(ast);
    visitor.nodes
}

struct DeclVisitor<'a> {
    index: &'a LineIndex,
    nodes: Vec<SyntaxNode>,
}

impl DeclVisitor<'_> {
    fn offset_at(&self, lc: proc_macro2::LineColumn) -> Option<usize> {
        self.index.offset(lc.line, lc.column + 1)
    }

    /// Byte range strictly between a brace pair: starts just past `{`,
    /// ends at `}`.
    fn body_range(&self, brace: &syn::token::Brace) -> Option<(usize, usize)> {
        let start = self.offset_at(brace.span.open().end())?;
        let end = self.offset_at(brace.span.close().start())?;
        Some((start, end.saturating_sub(start)))
    }

    fn push(
        &mut self,
        kind: DeclarationKind,
        declaration: proc_macro2::Span,
        brace: Option<&syn::token::Brace>,
    ) {
        let mut node = SyntaxNode::new(kind);
        if let Some(offset) = self.offset_at(declaration.start()) {
            node = node.with_declaration_offset(offset);
        }
        if let Some((start, length)) = brace.and_then(|b| self.body_range(b)) {
            node = node.with_body(start, length);
        }
        self.nodes.push(node);
    }
}

impl<'ast> Visit<'ast> for DeclVisitor<'_> {
    fn visit_item_struct(&mut self, node: &'ast syn::ItemStruct) {
        // Unit and tuple structs have no brace-delimited body.
        let brace = match &node.fields {
            syn::Fields::Named(fields) => Some(&fields.brace_token),
            syn::Fields::Unnamed(_) | syn::Fields::Unit => None,
        };
        self.push(DeclarationKind::Struct, node.ident.span(), brace);
        syn::visit::visit_item_struct(self, node);
    }

    fn visit_item_enum(&mut self, node: &'ast syn::ItemEnum) {
        self.push(
            DeclarationKind::Enum,
            node.ident.span(),
            Some(&node.brace_token),
        );
        syn::visit::visit_item_enum(self, node);
    }

    fn visit_item_union(&mut self, node: &'ast syn::ItemUnion) {
        self.push(
            DeclarationKind::Union,
            node.ident.span(),
            Some(&node.fields.brace_token),
        );
        syn::visit::visit_item_union(self, node);
    }

    fn visit_item_trait(&mut self, node: &'ast syn::ItemTrait) {
        self.push(
            DeclarationKind::Trait,
            node.ident.span(),
            Some(&node.brace_token),
        );
        syn::visit::visit_item_trait(self, node);
    }

    fn visit_item_impl(&mut self, node: &'ast syn::ItemImpl) {
        self.push(
            DeclarationKind::Impl,
            node.impl_token.span,
            Some(&node.brace_token),
        );
        syn::visit::visit_item_impl(self, node);
    }

    fn visit_item_fn(&mut self, node: &'ast syn::ItemFn) {
        self.push(
            DeclarationKind::Function,
            node.sig.ident.span(),
            Some(&node.block.brace_token),
        );
        syn::visit::visit_item_fn(self, node);
    }

    fn visit_impl_item_fn(&mut self, node: &'ast syn::ImplItemFn) {
        self.push(
            DeclarationKind::Function,
            node.sig.ident.span(),
            Some(&node.block.brace_token),
        );
        syn::visit::visit_impl_item_fn(self, node);
    }

    fn visit_trait_item_fn(&mut self, node: &'ast syn::TraitItemFn) {
        // A stub without a default body yields no body metadata.
        let brace = node.default.as_ref().map(|block| &block.brace_token);
        self.push(DeclarationKind::Function, node.sig.ident.span(), brace);
        syn::visit::visit_trait_item_fn(self, node);
    }

    fn visit_item_mod(&mut self, node: &'ast syn::ItemMod) {
        let brace = node.content.as_ref().map(|(brace, _)| brace);
        self.push(DeclarationKind::Module, node.ident.span(), brace);
        syn::visit::visit_item_mod(self, node);
    }
}
