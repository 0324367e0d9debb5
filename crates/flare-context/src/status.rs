//! HTTP 状态码的最小封装。
//!
//! 上下文只负责「运输」响应钩子观察到的状态码，不做任何合法性裁决，
//! 因此这里刻意不引入完整的状态码枚举或分类逻辑。

use core::fmt;

/// 响应状态码，服务端运行时在响应发出阶段写入，供钩子与日志消费。
///
/// # 教案式说明
/// - **意图 (Why)**：以新类型包裹 `u16`，避免状态码与端口号、长度等裸数值在签名中混淆；
/// - **契约 (What)**：不校验取值范围，`0` 或 `65535` 同样原样保存，裁决权留给写入方；
/// - **权衡 (Trade-offs)**：不提供 `is_success()` 之类的分类方法，分类语义属于协议层，
///   在此提供会诱导调用方把路由决策写进上下文消费端。
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StatusCode(u16);

impl StatusCode {
    /// 包装一个原始状态码。
    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    /// 读取底层数值。
    pub const fn as_u16(self) -> u16 {
        self.0
    }
}

impl From<u16> for StatusCode {
    fn from(code: u16) -> Self {
        Self(code)
    }
}

impl From<StatusCode> for u16 {
    fn from(code: StatusCode) -> Self {
        code.0
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
