//! # error 模块说明
//!
//! ## 角色定位（Why）
//! - 为上下文写入路径集中定义错误语义，当前唯一的失败原因是试图写入保留头；
//! - 上层（服务端/客户端运行时）可依据稳定错误码统一上报观测指标。
//!
//! ## 设计要求（What）
//! - 在启用 `std` 特性时实现 `thiserror::Error`，兼容 `std::error::Error` 生态；
//! - 错误文案沿用线协议社区的惯用措辞（`provided header cannot set ...`），
//!   便于跨语言实现排障时相互印证；
//! - 错误内仅携带保留头的规范拼写，不携带调用方提交的原始大小写。
//!
//! ## 扩展建议（How）
//! - 枚举保持非穷尽，后续若出现新的写入约束（例如键名字符集校验），在此追加变体即可。

#[cfg(not(feature = "std"))]
use core::fmt;

#[cfg(feature = "std")]
use thiserror::Error;

/// 上下文写入错误域。
///
/// # 教案式说明
/// - **意图 (Why)**：头写入器承诺「要么整包生效、要么原样拒绝」，拒绝时必须告知调用方
///   踩中了哪一个保留头，帮助其改走协议感知的设施（如内容协商配置）。
/// - **契约 (What)**：
///   - 所有变体均为 `Send + Sync + 'static`，可安全跨线程传播；
///   - `header` 字段保存保留头的规范拼写（如 `Accept`），与调用方提交的大小写无关；
///   - 在启用 `std` 特性时派生 [`thiserror::Error`]，`no_std` 轨道手工实现 `Display`。
/// - **权衡 (Trade-offs)**：字段使用 `&'static str` 指向保留头常量表，零分配；代价是
///   错误无法回传调用方的原始拼写，排障时需结合调用点日志。
#[cfg_attr(feature = "std", derive(Error))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum ContextError {
    /// 调用方试图通过上下文写入由运行时独占管理的头。
    ///
    /// - **意图 (Why)**：`Accept`、`Content-Type`、`Twirp-Version` 由协议栈依据编解码
    ///   协商结果填写，旁路写入会制造「头与实际载荷不符」的隐蔽故障。
    /// - **契约 (What)**：`header` 为被拒绝的保留头规范拼写；整包写入均未生效。
    #[cfg_attr(feature = "std", error("provided header cannot set {header}"))]
    ReservedHeader { header: &'static str },
}

impl ContextError {
    /// 以保留头的规范拼写构造拒绝错误。
    pub(crate) const fn reserved(header: &'static str) -> Self {
        Self::ReservedHeader { header }
    }

    /// 返回错误对应的稳定错误码，供观测系统聚合使用。
    pub fn code(&self) -> &'static str {
        match self {
            Self::ReservedHeader { .. } => codes::CONTEXT_RESERVED_HEADER,
        }
    }

    /// 若错误源于保留头冲突，返回其规范拼写。
    pub fn reserved_header(&self) -> Option<&'static str> {
        match self {
            Self::ReservedHeader { header } => Some(header),
        }
    }
}

#[cfg(not(feature = "std"))]
impl fmt::Display for ContextError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReservedHeader { header } => {
                write!(f, "provided header cannot set {header}")
            }
        }
    }
}

/// 上下文契约内置的错误码常量集合，确保可观测性系统具有稳定识别符。
pub mod codes {
    /// 写入请求头或响应头时命中保留头。
    pub const CONTEXT_RESERVED_HEADER: &str = "context.reserved_header";
}

/// 上下文契约统一的 `Result` 别名，默认错误类型为 [`ContextError`]。
pub type Result<T, E = ContextError> = core::result::Result<T, E>;
