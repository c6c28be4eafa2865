//! XML rendering of full comments.
//!
//! The document carries entity metadata (kind, template-ness, method flags,
//! source position, USR, availability) on top of the comment text, for
//! indexers and documentation generators.

use std::fmt::Write;

use crate::ast::{
    Comment, FullComment, InlineCommandComment, ParagraphComment, ParamCommandComment,
    RenderKind, TParamCommandComment, VerbatimBlockComment,
};
use crate::classify::{FullCommentParts, command_info};
use crate::commands::CommandTraits;
use crate::decl::{
    AvailabilityAttr, DeclInfo, DeclKind, SourceLocationResolver, TemplateKind, UsrResolver,
};
use crate::error::RenderError;
use crate::escape::push_xml_escaped;
use crate::html::write_start_tag;

const VERBATIM_CODE: &str = r#"<Verbatim xml:space="preserve" kind="code">"#;
const VERBATIM_TEXT: &str = r#"<Verbatim xml:space="preserve" kind="verbatim">"#;

/// Renders full comments as XML documents.
pub struct XmlRenderer<'a> {
    traits: &'a CommandTraits,
    locations: &'a dyn SourceLocationResolver,
    usrs: &'a dyn UsrResolver,
}

impl<'a> XmlRenderer<'a> {
    #[must_use]
    pub fn new(
        traits: &'a CommandTraits,
        locations: &'a dyn SourceLocationResolver,
        usrs: &'a dyn UsrResolver,
    ) -> Self {
        Self {
            traits,
            locations,
            usrs,
        }
    }

    /// Render a full comment.
    ///
    /// # Errors
    ///
    /// Returns a precondition error if the tree is malformed or the attached
    /// function declaration claims to be a partial specialization.
    pub fn render(&self, comment: &FullComment) -> Result<String, RenderError> {
        let mut out = String::with_capacity(1024);
        self.visit_full_comment(comment, &mut out)
            .inspect_err(|e| tracing::debug!(error = %e, "XML rendering aborted"))?;
        Ok(out)
    }

    fn visit(&self, node: &Comment, out: &mut String) -> Result<(), RenderError> {
        match node {
            Comment::Text(text) => push_xml_escaped(out, &text.text),
            Comment::InlineCommand(command) => visit_inline_command(command, out)?,
            Comment::HtmlStartTag(tag) => {
                out.push_str("<rawHTML><![CDATA[");
                write_start_tag(tag, out)?;
                out.push_str("]]></rawHTML>");
            }
            Comment::HtmlEndTag(tag) => {
                write!(out, "<rawHTML>&lt;/{}&gt;</rawHTML>", tag.tag_name)?;
            }
            Comment::Paragraph(paragraph) => self.visit_paragraph(paragraph, out)?,
            Comment::BlockCommand(block) => self.visit_paragraph(&block.paragraph, out)?,
            Comment::ParamCommand(param) => self.visit_param_command(param, out)?,
            Comment::TParamCommand(tparam) => self.visit_tparam_command(tparam, out)?,
            Comment::VerbatimBlock(block) => self.visit_verbatim_block(block, out)?,
            Comment::VerbatimBlockLine(_) => return Err(RenderError::VerbatimBlockLine),
            Comment::VerbatimLine(line) => {
                out.push_str(VERBATIM_TEXT);
                push_xml_escaped(out, &line.text);
                out.push_str("</Verbatim>");
            }
            Comment::Full(comment) => self.visit_full_comment(comment, out)?,
        }
        Ok(())
    }

    fn visit_paragraph(
        &self,
        paragraph: &ParagraphComment,
        out: &mut String,
    ) -> Result<(), RenderError> {
        if paragraph.is_whitespace() {
            return Ok(());
        }
        out.push_str("<Para>");
        for child in &paragraph.children {
            self.visit(child, out)?;
        }
        out.push_str("</Para>");
        Ok(())
    }

    fn visit_param_command(
        &self,
        param: &ParamCommandComment,
        out: &mut String,
    ) -> Result<(), RenderError> {
        out.push_str("<Parameter><Name>");
        push_xml_escaped(out, param.name.as_deref().unwrap_or_default());
        out.push_str("</Name>");

        if let Some(index) = param.index {
            write!(out, "<Index>{index}</Index>")?;
        }

        write!(
            out,
            r#"<Direction isExplicit="{}">{}</Direction><Discussion>"#,
            u8::from(param.direction_explicit),
            param.direction.as_str()
        )?;
        self.visit_paragraph(&param.paragraph, out)?;
        out.push_str("</Discussion></Parameter>");
        Ok(())
    }

    fn visit_tparam_command(
        &self,
        tparam: &TParamCommandComment,
        out: &mut String,
    ) -> Result<(), RenderError> {
        out.push_str("<Parameter><Name>");
        push_xml_escaped(out, tparam.name.as_deref().unwrap_or_default());
        out.push_str("</Name>");

        if tparam.depth() == 1
            && let Some(index) = tparam.index(0)
        {
            write!(out, "<Index>{index}</Index>")?;
        }

        out.push_str("<Discussion>");
        self.visit_paragraph(&tparam.paragraph, out)?;
        out.push_str("</Discussion></Parameter>");
        Ok(())
    }

    fn visit_verbatim_block(
        &self,
        block: &VerbatimBlockComment,
        out: &mut String,
    ) -> Result<(), RenderError> {
        if block.lines.is_empty() {
            return Ok(());
        }
        let info = command_info(self.traits, block.command)?;
        out.push_str(if info.name == "code" {
            VERBATIM_CODE
        } else {
            VERBATIM_TEXT
        });
        for (i, line) in block.lines.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            push_xml_escaped(out, &line.text);
        }
        out.push_str("</Verbatim>");
        Ok(())
    }

    fn visit_full_comment(
        &self,
        comment: &FullComment,
        out: &mut String,
    ) -> Result<(), RenderError> {
        let parts = FullCommentParts::classify(comment, self.traits)?;
        tracing::debug!(
            params = parts.params.len(),
            tparams = parts.tparams.len(),
            misc = parts.misc.len(),
            "Rendering full comment as XML"
        );

        let Some(decl) = &comment.decl else {
            out.push_str("<Other><Name>unknown</Name></Other>");
            return Ok(());
        };
        let root = self.write_decl_header(decl, out)?;

        if let Some(brief) = parts.brief {
            out.push_str("<Abstract>");
            self.visit_paragraph(&brief.paragraph, out)?;
            out.push_str("</Abstract>");
        } else if let Some(first) = parts.first_paragraph {
            out.push_str("<Abstract>");
            self.visit_paragraph(first, out)?;
            out.push_str("</Abstract>");
        }

        if !parts.tparams.is_empty() {
            out.push_str("<TemplateParameters>");
            for tparam in &parts.tparams {
                self.visit_tparam_command(tparam, out)?;
            }
            out.push_str("</TemplateParameters>");
        }

        if !parts.params.is_empty() {
            out.push_str("<Parameters>");
            for param in &parts.params {
                self.visit_param_command(param, out)?;
            }
            out.push_str("</Parameters>");
        }

        if let Some(returns) = parts.returns {
            out.push_str("<ResultDiscussion>");
            self.visit_paragraph(&returns.paragraph, out)?;
            out.push_str("</ResultDiscussion>");
        }

        for attr in &decl.availability {
            write_availability(attr, out)?;
        }

        let mut discussion = parts.discussion().peekable();
        if discussion.peek().is_some() {
            out.push_str("<Discussion>");
            for block in discussion {
                self.visit(block, out)?;
            }
            out.push_str("</Discussion>");
        }

        write!(out, "</{root}>")?;
        Ok(())
    }

    /// Write the root start tag, `<Name>` and `<USR>`; returns the root tag name.
    fn write_decl_header(
        &self,
        decl: &DeclInfo,
        out: &mut String,
    ) -> Result<&'static str, RenderError> {
        let root = decl.kind.tag();
        write!(out, "<{root}")?;

        match decl.kind {
            DeclKind::Function => {
                match decl.template_kind {
                    TemplateKind::NotTemplate => {}
                    TemplateKind::Template => out.push_str(r#" templateKind="template""#),
                    TemplateKind::Specialization => {
                        out.push_str(r#" templateKind="specialization""#);
                    }
                    TemplateKind::PartialSpecialization => {
                        return Err(RenderError::FunctionPartialSpecialization);
                    }
                }
                if decl.is_instance_method {
                    out.push_str(r#" isInstanceMethod="1""#);
                }
                if decl.is_class_method {
                    out.push_str(r#" isClassMethod="1""#);
                }
            }
            DeclKind::Class => match decl.template_kind {
                TemplateKind::NotTemplate => {}
                TemplateKind::Template => out.push_str(r#" templateKind="template""#),
                TemplateKind::Specialization => out.push_str(r#" templateKind="specialization""#),
                TemplateKind::PartialSpecialization => {
                    out.push_str(r#" templateKind="partialSpecialization""#);
                }
            },
            _ => {}
        }

        if let Some(location) = self.locations.resolve_location(decl.decl) {
            if let Some(file) = &location.file {
                out.push_str(r#" file=""#);
                push_xml_escaped(out, file);
                out.push('"');
            }
            write!(
                out,
                r#" line="{}" column="{}""#,
                location.line, location.column
            )?;
        }
        out.push('>');

        match &decl.name {
            Some(name) => {
                out.push_str("<Name>");
                push_xml_escaped(out, name);
                out.push_str("</Name>");
            }
            None => out.push_str("<Name>&lt;anonymous&gt;</Name>"),
        }

        if let Some(usr) = self
            .usrs
            .resolve_usr(decl.decl)
            .filter(|usr| !usr.is_empty())
        {
            out.push_str("<USR>");
            push_xml_escaped(out, &usr);
            out.push_str("</USR>");
        }

        Ok(root)
    }
}

fn visit_inline_command(
    command: &InlineCommandComment,
    out: &mut String,
) -> Result<(), RenderError> {
    let Some(first) = command.args.first().filter(|arg| !arg.is_empty()) else {
        return Ok(());
    };

    let tag = match command.render_kind {
        RenderKind::Normal => {
            for arg in &command.args {
                push_xml_escaped(out, arg);
                out.push(' ');
            }
            return Ok(());
        }
        RenderKind::Bold => "bold",
        RenderKind::Monospaced => "monospaced",
        RenderKind::Emphasized => "emphasized",
    };

    if command.args.len() != 1 {
        return Err(RenderError::StyledArgumentCount {
            command: command.name.clone(),
            count: command.args.len(),
        });
    }

    write!(out, "<{tag}>")?;
    push_xml_escaped(out, first);
    write!(out, "</{tag}>")?;
    Ok(())
}

/// Availability children are each preceded by a single space.
fn write_availability(attr: &AvailabilityAttr, out: &mut String) -> Result<(), RenderError> {
    out.push_str(r#"<Availability distribution=""#);
    out.push_str(attr.distribution());
    out.push_str(r#"">"#);

    let versions = [
        ("IntroducedInVersion", attr.introduced),
        ("DeprecatedInVersion", attr.deprecated),
        ("RemovedAfterVersion", attr.obsoleted),
    ];
    for (tag, version) in versions {
        if let Some(version) = version {
            write!(out, " <{tag}>{version}</{tag}>")?;
        }
    }

    if !attr.message.is_empty() {
        out.push_str(" <DeprecationSummary>");
        push_xml_escaped(out, &attr.message);
        out.push_str("</DeprecationSummary>");
    }

    out.push_str(" <Unavailable>");
    out.push_str(if attr.unavailable { "true" } else { "false" });
    out.push_str("</Unavailable> </Availability>");
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use quick_xml::events::Event;
    use quick_xml::reader::Reader;

    use super::*;
    use crate::ast::{
        BlockCommandComment, HtmlEndTagComment, HtmlStartTagComment, PassDirection, TextComment,
        VerbatimLineComment,
    };
    use crate::decl::{DeclId, SourceLocation, Unresolved, VersionTuple};

    fn render(traits: &CommandTraits, comment: &FullComment) -> String {
        XmlRenderer::new(traits, &Unresolved, &Unresolved)
            .render(comment)
            .unwrap()
    }

    fn block(traits: &CommandTraits, name: &str, text: &str) -> Comment {
        BlockCommandComment::new(traits.lookup(name).unwrap(), ParagraphComment::text(text)).into()
    }

    fn function(name: &str) -> DeclInfo {
        DeclInfo::new(DeclId(1), DeclKind::Function).with_name(name)
    }

    fn documented(children: Vec<Comment>) -> FullComment {
        FullComment::new(children)
            .with_decl(DeclInfo::new(DeclId(5), DeclKind::Variable).with_name("v"))
    }

    /// Parse the document with quick-xml and return the root element name.
    fn assert_well_formed(xml: &str) -> String {
        let mut reader = Reader::from_str(xml);
        let mut root = None;
        let mut depth = 0usize;
        loop {
            match reader.read_event().expect("well-formed XML") {
                Event::Start(e) => {
                    if depth == 0 {
                        root = Some(String::from_utf8_lossy(e.name().as_ref()).into_owned());
                    }
                    depth += 1;
                }
                Event::End(_) => depth -= 1,
                Event::Eof => break,
                _ => {}
            }
        }
        assert_eq!(depth, 0);
        root.expect("root element")
    }

    #[test]
    fn test_function_with_brief() {
        let traits = CommandTraits::new();
        let comment =
            FullComment::new(vec![block(&traits, "brief", "Does X.")]).with_decl(function("foo"));

        let xml = render(&traits, &comment);

        assert_eq!(
            xml,
            "<Function><Name>foo</Name><Abstract><Para>Does X.</Para></Abstract></Function>"
        );
        assert_eq!(assert_well_formed(&xml), "Function");
    }

    #[test]
    fn test_without_decl_has_no_sections() {
        let traits = CommandTraits::new();
        let comment = FullComment::new(vec![
            ParagraphComment::text("Text.").into(),
            ParagraphComment::text("More.").into(),
            ParamCommandComment::new("x", ParagraphComment::text("input"))
                .with_index(0)
                .into(),
            block(&traits, "returns", "nothing"),
        ]);

        let xml = render(&traits, &comment);

        assert_eq!(xml, "<Other><Name>unknown</Name></Other>");
        assert_eq!(assert_well_formed(&xml), "Other");
    }

    #[test]
    fn test_anonymous_entity() {
        let traits = CommandTraits::new();
        let comment = FullComment::new(vec![]).with_decl(DeclInfo::new(DeclId(3), DeclKind::Enum));

        assert_eq!(render(&traits, &comment), "<Enum><Name>&lt;anonymous&gt;</Name></Enum>");
    }

    #[test]
    fn test_location_and_usr() {
        let traits = CommandTraits::new();
        let comment = FullComment::new(vec![]).with_decl(function("f&g"));
        let locations = |_: DeclId| {
            Some(SourceLocation {
                file: Some("src/a'b.h".to_owned()),
                line: 12,
                column: 6,
            })
        };
        let usrs = |_: DeclId| Some("c:@F@f<g>".to_owned());

        let xml = XmlRenderer::new(&traits, &locations, &usrs)
            .render(&comment)
            .unwrap();

        assert_eq!(
            xml,
            r#"<Function file="src/a&apos;b.h" line="12" column="6"><Name>f&amp;g</Name><USR>c:@F@f&lt;g&gt;</USR></Function>"#
        );
    }

    #[test]
    fn test_location_without_file() {
        let traits = CommandTraits::new();
        let comment = FullComment::new(vec![])
            .with_decl(DeclInfo::new(DeclId(1), DeclKind::Variable).with_name("v"));
        let locations = |_: DeclId| {
            Some(SourceLocation {
                file: None,
                line: 1,
                column: 2,
            })
        };

        let xml = XmlRenderer::new(&traits, &locations, &Unresolved)
            .render(&comment)
            .unwrap();

        assert_eq!(xml, r#"<Variable line="1" column="2"><Name>v</Name></Variable>"#);
    }

    #[test]
    fn test_function_attributes() {
        let traits = CommandTraits::new();
        let mut decl = function("m").with_template_kind(TemplateKind::Specialization);
        decl.is_instance_method = true;
        decl.is_class_method = true;
        let comment = FullComment::new(vec![]).with_decl(decl);

        assert_eq!(
            render(&traits, &comment),
            r#"<Function templateKind="specialization" isInstanceMethod="1" isClassMethod="1"><Name>m</Name></Function>"#
        );
    }

    #[test]
    fn test_class_partial_specialization() {
        let traits = CommandTraits::new();
        let comment = FullComment::new(vec![]).with_decl(
            DeclInfo::new(DeclId(2), DeclKind::Class)
                .with_name("Vec")
                .with_template_kind(TemplateKind::PartialSpecialization),
        );

        assert_eq!(
            render(&traits, &comment),
            r#"<Class templateKind="partialSpecialization"><Name>Vec</Name></Class>"#
        );
    }

    #[test]
    fn test_function_partial_specialization_fails() {
        let traits = CommandTraits::new();
        let comment = FullComment::new(vec![])
            .with_decl(function("f").with_template_kind(TemplateKind::PartialSpecialization));

        let err = XmlRenderer::new(&traits, &Unresolved, &Unresolved)
            .render(&comment)
            .unwrap_err();
        assert!(matches!(err, RenderError::FunctionPartialSpecialization));
    }

    #[test]
    fn test_template_kind_ignored_for_other_kinds() {
        let traits = CommandTraits::new();
        let comment = FullComment::new(vec![]).with_decl(
            DeclInfo::new(DeclId(2), DeclKind::Typedef)
                .with_name("T")
                .with_template_kind(TemplateKind::Template),
        );

        assert_eq!(render(&traits, &comment), "<Typedef><Name>T</Name></Typedef>");
    }

    #[test]
    fn test_sections_in_order() {
        let traits = CommandTraits::new();
        let comment = FullComment::new(vec![
            ParagraphComment::text("Summary.").into(),
            ParamCommandComment::new("b", ParagraphComment::text("second"))
                .with_index(1)
                .with_direction(PassDirection::InOut)
                .into(),
            ParamCommandComment::new("a", ParagraphComment::text("first"))
                .with_index(0)
                .into(),
            TParamCommandComment::new("T", ParagraphComment::text("type"))
                .with_position(vec![0])
                .into(),
            TParamCommandComment::new("U", ParagraphComment::text("inner"))
                .with_position(vec![0, 0])
                .into(),
            block(&traits, "returns", "sum"),
            ParagraphComment::text("Details.").into(),
        ])
        .with_decl(function("add").with_template_kind(TemplateKind::Template));

        let xml = render(&traits, &comment);

        assert_eq!(
            xml,
            concat!(
                r#"<Function templateKind="template"><Name>add</Name>"#,
                "<Abstract><Para>Summary.</Para></Abstract>",
                "<TemplateParameters>",
                "<Parameter><Name>T</Name><Index>0</Index><Discussion><Para>type</Para></Discussion></Parameter>",
                "<Parameter><Name>U</Name><Discussion><Para>inner</Para></Discussion></Parameter>",
                "</TemplateParameters>",
                "<Parameters>",
                r#"<Parameter><Name>a</Name><Index>0</Index><Direction isExplicit="0">in</Direction>"#,
                "<Discussion><Para>first</Para></Discussion></Parameter>",
                r#"<Parameter><Name>b</Name><Index>1</Index><Direction isExplicit="1">in,out</Direction>"#,
                "<Discussion><Para>second</Para></Discussion></Parameter>",
                "</Parameters>",
                "<ResultDiscussion><Para>sum</Para></ResultDiscussion>",
                "<Discussion><Para>Details.</Para></Discussion>",
                "</Function>",
            )
        );
        assert_eq!(assert_well_formed(&xml), "Function");
    }

    #[test]
    fn test_param_without_index_and_empty_discussion() {
        let traits = CommandTraits::new();
        let comment = documented(vec![
            ParamCommandComment::new("out", ParagraphComment::default())
                .with_direction(PassDirection::Out)
                .into(),
        ]);

        assert_eq!(
            render(&traits, &comment),
            concat!(
                "<Variable><Name>v</Name><Parameters>",
                r#"<Parameter><Name>out</Name><Direction isExplicit="1">out</Direction><Discussion></Discussion></Parameter>"#,
                "</Parameters></Variable>",
            )
        );
    }

    #[test]
    fn test_availability() {
        let traits = CommandTraits::new();
        let decl = function("old")
            .with_availability(AvailabilityAttr {
                platform: Some("macosx".to_owned()),
                introduced: Some(VersionTuple::new(10).with_minor(4)),
                deprecated: Some(VersionTuple::new(10).with_minor(7)),
                obsoleted: Some(VersionTuple::new(11)),
                message: "use <new>".to_owned(),
                unavailable: false,
            })
            .with_availability(AvailabilityAttr {
                platform: Some("ios".to_owned()),
                unavailable: true,
                ..AvailabilityAttr::default()
            });
        let comment = FullComment::new(vec![
            ParagraphComment::text("Old.").into(),
            ParagraphComment::text("More.").into(),
        ])
        .with_decl(decl);

        let xml = render(&traits, &comment);

        assert_eq!(
            xml,
            concat!(
                "<Function><Name>old</Name><Abstract><Para>Old.</Para></Abstract>",
                r#"<Availability distribution="OSX">"#,
                " <IntroducedInVersion>10.4</IntroducedInVersion>",
                " <DeprecatedInVersion>10.7</DeprecatedInVersion>",
                " <RemovedAfterVersion>11</RemovedAfterVersion>",
                " <DeprecationSummary>use &lt;new&gt;</DeprecationSummary>",
                " <Unavailable>false</Unavailable> </Availability>",
                r#"<Availability distribution="iOS"> <Unavailable>true</Unavailable> </Availability>"#,
                "<Discussion><Para>More.</Para></Discussion>",
                "</Function>",
            )
        );
        assert_eq!(assert_well_formed(&xml), "Function");
    }

    #[test]
    fn test_inline_content() {
        let traits = CommandTraits::new();
        let comment = documented(vec![
            ParagraphComment::new(vec![
                InlineCommandComment::new("b", RenderKind::Bold, vec!["ok".to_owned()]).into(),
                InlineCommandComment::new("c", RenderKind::Monospaced, vec!["x".to_owned()]).into(),
                InlineCommandComment::new("e", RenderKind::Emphasized, vec!["y".to_owned()]).into(),
                InlineCommandComment::new("ref", RenderKind::Normal, vec!["a/b".to_owned()]).into(),
                TextComment::new("'q'").into(),
            ])
            .into(),
        ]);

        assert_eq!(
            render(&traits, &comment),
            concat!(
                "<Variable><Name>v</Name><Abstract><Para>",
                "<bold>ok</bold><monospaced>x</monospaced><emphasized>y</emphasized>a/b &apos;q&apos;",
                "</Para></Abstract></Variable>",
            )
        );
    }

    #[test]
    fn test_raw_html() {
        let traits = CommandTraits::new();
        let comment = documented(vec![
            ParagraphComment::new(vec![
                HtmlStartTagComment::new("a").with_attr("href", "x&y").into(),
                TextComment::new("link").into(),
                HtmlEndTagComment::new("a").into(),
            ])
            .into(),
        ]);

        let xml = render(&traits, &comment);

        assert_eq!(
            xml,
            concat!(
                "<Variable><Name>v</Name><Abstract><Para>",
                r#"<rawHTML><![CDATA[<a href="x&y">]]></rawHTML>link<rawHTML>&lt;/a&gt;</rawHTML>"#,
                "</Para></Abstract></Variable>",
            )
        );
        assert_eq!(assert_well_formed(&xml), "Variable");
    }

    #[test]
    fn test_verbatim_kinds() {
        let traits = CommandTraits::new();
        let comment = documented(vec![
            VerbatimBlockComment::new(traits.lookup("code").unwrap(), ["a < b", "c/d"]).into(),
            VerbatimBlockComment::new(traits.lookup("verbatim").unwrap(), ["raw"]).into(),
            VerbatimBlockComment::new(traits.lookup("code").unwrap(), Vec::<String>::new()).into(),
            VerbatimLineComment::new(traits.lookup("fn").unwrap(), "void f()").into(),
            VerbatimLineComment::new(traits.lookup("ingroup").unwrap(), "core").into(),
        ]);

        assert_eq!(
            render(&traits, &comment),
            concat!(
                "<Variable><Name>v</Name><Discussion>",
                r#"<Verbatim xml:space="preserve" kind="code">a &lt; b"#,
                "\nc/d</Verbatim>",
                r#"<Verbatim xml:space="preserve" kind="verbatim">raw</Verbatim>"#,
                r#"<Verbatim xml:space="preserve" kind="verbatim">core</Verbatim>"#,
                "</Discussion></Variable>",
            )
        );
    }

    #[test]
    fn test_brief_suppresses_nothing_else() {
        let traits = CommandTraits::new();
        let comment = documented(vec![
            ParagraphComment::text("Intro.").into(),
            block(&traits, "brief", "Short."),
            ParagraphComment::text(" ").into(),
        ]);

        assert_eq!(
            render(&traits, &comment),
            concat!(
                "<Variable><Name>v</Name>",
                "<Abstract><Para>Short.</Para></Abstract>",
                "<Discussion><Para>Intro.</Para></Discussion>",
                "</Variable>",
            )
        );
    }

    #[test]
    fn test_malformed_tree_returns_error() {
        let traits = CommandTraits::new();
        let renderer = XmlRenderer::new(&traits, &Unresolved, &Unresolved);

        let err = renderer
            .render(&documented(vec![TextComment::new("loose").into()]))
            .unwrap_err();
        assert!(matches!(err, RenderError::NotBlockContent { .. }));

        let err = renderer
            .render(&FullComment::new(vec![TextComment::new("loose").into()]))
            .unwrap_err();
        assert!(matches!(err, RenderError::NotBlockContent { .. }));
    }
}
