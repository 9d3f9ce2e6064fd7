//! TypeScript arrow function builder.

use apigen_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

/// A function parameter.
#[derive(Debug, Clone)]
pub struct Param {
    pub name: String,
    pub ty: Option<String>,
    pub default: Option<String>,
}

impl Param {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: None,
            default: None,
        }
    }

    pub fn ty(mut self, ty: impl Into<String>) -> Self {
        self.ty = Some(ty.into());
        self
    }

    pub fn default(mut self, value: impl Into<String>) -> Self {
        self.default = Some(value.into());
        self
    }

    fn render(&self) -> String {
        let mut out = self.name.clone();
        if let Some(ty) = &self.ty {
            out.push_str(": ");
            out.push_str(ty);
        }
        if let Some(default) = &self.default {
            out.push_str(" = ");
            out.push_str(default);
        }
        out
    }
}

/// An arrow function bound to a const (`const name = (...) => { ... }`).
#[derive(Debug, Clone)]
pub struct ArrowFn {
    name: String,
    comments: Vec<String>,
    params: Vec<Param>,
    return_type: Option<String>,
    is_async: bool,
    exported: bool,
    body: Vec<CodeFragment>,
}

impl ArrowFn {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            comments: Vec::new(),
            params: Vec::new(),
            return_type: None,
            is_async: false,
            exported: false,
            body: Vec::new(),
        }
    }

    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    pub fn returns(mut self, ty: impl Into<String>) -> Self {
        self.return_type = Some(ty.into());
        self
    }

    pub fn async_(mut self) -> Self {
        self.is_async = true;
        self
    }

    pub fn export(mut self) -> Self {
        self.exported = true;
        self
    }

    /// Comment lines rendered above the declaration.
    pub fn comments(mut self, lines: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.comments.extend(lines.into_iter().map(Into::into));
        self
    }

    pub fn body_line(mut self, line: impl Into<String>) -> Self {
        self.body.push(CodeFragment::Line(line.into()));
        self
    }

    pub fn body_fragment(mut self, fragment: CodeFragment) -> Self {
        self.body.push(fragment);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    fn header(&self) -> String {
        let export = if self.exported { "export " } else { "" };
        let async_kw = if self.is_async { "async " } else { "" };
        let params = self
            .params
            .iter()
            .map(Param::render)
            .collect::<Vec<_>>()
            .join(", ");
        let return_type = match &self.return_type {
            Some(ty) => format!(": {}", ty),
            None => String::new(),
        };

        format!(
            "{}const {} = {}({}){} => {{",
            export, self.name, async_kw, params, return_type
        )
    }

    /// Render the function to a CodeBuilder.
    pub fn render(&self, mut builder: CodeBuilder) -> CodeBuilder {
        builder.emit(self);
        builder
    }

    /// Build the function as a string.
    pub fn build(&self) -> String {
        self.render(CodeBuilder::typescript()).build()
    }
}

impl Renderable for ArrowFn {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = CodeFragment::comments(self.comments.iter().cloned());
        fragments.push(CodeFragment::block(
            self.header(),
            self.body.clone(),
            Some("}".to_string()),
        ));
        fragments
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_arrow_fn() {
        let f = ArrowFn::new("noop").build();
        assert_eq!(f, "const noop = () => {\n}\n");
    }

    #[test]
    fn test_async_arrow_fn_with_params() {
        let f = ArrowFn::new("getPet")
            .async_()
            .comments(["Get a pet"])
            .param(Param::new("params").ty("ApiTypes.GetPetRequest"))
            .returns("Promise<ApiTypes.GetPetResponse>")
            .body_line("return 1")
            .build();
        assert_eq!(
            f,
            "// Get a pet\nconst getPet = async (params: ApiTypes.GetPetRequest): Promise<ApiTypes.GetPetResponse> => {\n  return 1\n}\n"
        );
    }

    #[test]
    fn test_exported_with_default_param() {
        let f = ArrowFn::new("useApi")
            .export()
            .param(Param::new("config").ty("ApiConfig").default("{}"))
            .body_line("return {}")
            .build();
        assert_eq!(
            f,
            "export const useApi = (config: ApiConfig = {}) => {\n  return {}\n}\n"
        );
    }
}
