//! HTTP helper document generator.
//!
//! The helper is fixed text, independent of the API document. Every
//! client function calls it exactly once with an explicit `baseURL`.

use std::path::{Path, PathBuf};

use apigen_core::{FileRules, GeneratedFile};

use crate::code_file::{CodeFile, RawCode};

const SERVICE_SOURCE: &str = r#"type Methods =
  | 'GET'
  | 'HEAD'
  | 'PATCH'
  | 'POST'
  | 'PUT'
  | 'DELETE'
  | 'CONNECT'
  | 'OPTIONS'
  | 'TRACE'
  | 'get'
  | 'head'
  | 'patch'
  | 'post'
  | 'put'
  | 'delete'
  | 'connect'
  | 'options'
  | 'trace'

export interface ApiServiceOptions {
  method?: Methods
  query?: Record<string, any>
  body?: any
  headers?: HeadersInit
  baseURL?: string
  parseResponse?: boolean
}

const buildUrl = (url: string, baseURL: string, query?: Record<string, any>): string => {
  const path = url.startsWith('/') ? url : `/${url}`
  const search = new URLSearchParams()

  for (const [key, value] of Object.entries(query ?? {})) {
    if (value === undefined || value === null) continue
    if (Array.isArray(value)) {
      value.forEach((item) => search.append(key, String(item)))
    } else {
      search.append(key, String(value))
    }
  }

  const qs = search.toString()
  const target = `${baseURL.replace(/\/+$/, '')}${path}`
  return qs ? `${target}?${qs}` : target
}

export async function useApiService<T>(url: string, options: ApiServiceOptions = {}): Promise<T> {
  const {
    method = 'GET',
    query,
    body,
    headers = {},
    baseURL = '',
    parseResponse = true
  } = options

  const requestHeaders = new Headers(headers)
  if (body !== undefined && !requestHeaders.has('Content-Type')) {
    requestHeaders.set('Content-Type', 'application/json')
  }

  try {
    const response = await fetch(buildUrl(url, baseURL, query), {
      method: method.toUpperCase(),
      headers: requestHeaders,
      body: body === undefined ? undefined : JSON.stringify(body)
    })

    if (!response.ok) {
      throw new Error(`${method.toUpperCase()} ${url} failed with status ${response.status}`)
    }

    if (!parseResponse) {
      return response as unknown as T
    }

    const text = await response.text()
    return (text ? JSON.parse(text) : undefined) as T
  } catch (err: any) {
    console.error(`[useApiService] ${method.toUpperCase()} ${url}`, err)
    throw err
  }
}"#;

/// The static `useApiService` helper.
pub struct UseApiServiceTs {
    path: PathBuf,
}

impl UseApiServiceTs {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path relative to the output directory.
    pub fn relative_path(&self) -> &Path {
        &self.path
    }
}

impl GeneratedFile for UseApiServiceTs {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(&self.path)
    }

    fn rules(&self) -> FileRules {
        FileRules::always_overwrite()
    }

    fn render(&self) -> String {
        CodeFile::new()
            .header(["Generated HTTP helper for the API client"])
            .add(RawCode::new(SERVICE_SOURCE))
            .render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_helper_signature() {
        let code = UseApiServiceTs::new("composables/useApiService.ts").render();

        assert!(code.starts_with("// Generated HTTP helper for the API client\n\ntype Methods =\n"));
        assert!(code.contains(
            "export async function useApiService<T>(url: string, options: ApiServiceOptions = {}): Promise<T> {\n"
        ));
        assert!(code.ends_with("}\n"));
    }

    #[test]
    fn test_helper_is_independent_of_input() {
        let a = UseApiServiceTs::new("a.ts").render();
        let b = UseApiServiceTs::new("b/c.ts").render();
        assert_eq!(a, b);
    }
}
