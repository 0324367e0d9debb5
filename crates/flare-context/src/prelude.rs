//! # flare-context Prelude
//!
//! ## 教案级说明（Why）
//! - **统一导入面**：服务端钩子、客户端拦截器与生成代码都要触达同一组
//!   上下文类型，提供浅路径入口，避免业务代码里散落深层路径；
//! - **范围控制**：只收录稳定契约，试验性内容一律不进 Prelude。
//!
//! ## 契约定义（What）
//! - 上下文本体：[`Context`]；
//! - 头词汇：[`HeaderMap`]、[`HeaderName`] 与两份保留头清单；
//! - 错误体系：[`ContextError`]、[`Result`] 与稳定错误码命名空间 [`codes`]；
//! - 状态码：[`StatusCode`]。
//!
//! ## 使用方式（How）
//! - 依赖方执行 `use flare_context::prelude::*;` 即可获得上述全部类型。

pub use crate::{
    context::Context,
    error::{ContextError, Result, codes},
    header::{HeaderMap, HeaderName, RESERVED_REQUEST_HEADERS, RESERVED_RESPONSE_HEADERS},
    status::StatusCode,
};
