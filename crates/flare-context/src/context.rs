//! # context 模块说明
//!
//! ## 角色定位（Why）
//! - 为一次 RPC 调用提供贯穿中间件链的元数据载体：路由身份（包/服务/方法名）、
//!   响应状态码，以及请求、响应两个方向的头包；
//! - 读写双方解耦：运行时在路由完成后写入身份键，业务钩子与中间件只管读取，
//!   互相不需要感知对方是否存在。
//!
//! ## 设计要求（What）
//! - 读取一律失败软化：键未写入时返回 `None` 或空头包，缺键是合法状态而非错误；
//! - 写入一律写时复制：返回携带变更的派生上下文，原上下文保持不变，
//!   已发往其他组件的旧引用不会被远程改写；
//! - 头写入器在入口拦截保留头，整包要么全部生效，要么原样拒绝。
//!
//! ## 扩展建议（How）
//! - 键词汇表是封闭的：新增键意味着运行时与全部中间件的契约演进，必须以
//!   新访问器的形式显式落地，而不是退化成开放的字符串字典。

use alloc::borrow::Cow;

use crate::error::{ContextError, Result};
use crate::header::{
    self, HeaderMap, HeaderName, RESERVED_REQUEST_HEADERS, RESERVED_RESPONSE_HEADERS,
};
use crate::status::StatusCode;

/// 请求级元数据上下文，贯穿一次调用的全部处理阶段。
///
/// # 教案式说明
/// - **意图 (Why)**：服务端运行时、拦截器与业务钩子需要一个共享的调用视图，
///   但彼此的生命周期并不对齐；以值语义的快照传递元数据，避免共享可变状态。
/// - **契约 (What)**：
///   - 词汇表固定：包名、服务名、方法名、响应状态码、请求头、响应头；
///   - 读取器失败软化，未写入的键返回 `None`，头包缺省为空包；
///   - 写入器接受 `&self` 并返回派生副本，原上下文的任何读数都不受影响；
///   - 空字符串是合法值：显式写入 `""` 与从未写入可以被读取方区分。
/// - **设计 (How)**：所有字段按值持有，[`Clone`] 即深拷贝快照；写入器内部
///   先完成校验再克隆，保证拒绝路径零副作用。
/// - **权衡 (Trade-offs)**：每次写入克隆整个上下文，换来的是无锁、无内部
///   可变性的纯值模型；调用级头包通常只有个位数条目，克隆代价可控。
///
/// # 示例（Examples）
/// ```rust
/// use flare_context::Context;
///
/// let base = Context::new();
/// let ctx = base
///     .with_package_name("twirp.example.haberdasher")
///     .with_service_name("Haberdasher")
///     .with_method_name("MakeHat");
///
/// assert_eq!(ctx.method_name(), Some("MakeHat"));
/// assert!(base.method_name().is_none(), "写入器返回派生副本，原上下文保持不变");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Context {
    package_name: Option<Cow<'static, str>>,
    service_name: Option<Cow<'static, str>>,
    method_name: Option<Cow<'static, str>>,
    status_code: Option<StatusCode>,
    request_headers: HeaderMap,
    response_headers: HeaderMap,
}

impl Context {
    /// 创建空上下文，所有键均处于「未写入」状态。
    pub fn new() -> Self {
        Self::default()
    }

    /// 读取 Proto 包名；未写入返回 `None`。
    ///
    /// 包名允许为空字符串：未声明 `package` 的 Proto 文件会显式写入 `""`，
    /// 读取方可据此区分「在无包服务里」与「路由信息尚未注入」。
    pub fn package_name(&self) -> Option<&str> {
        self.package_name.as_deref()
    }

    /// 读取服务名（如 `Haberdasher`）；未写入返回 `None`。
    pub fn service_name(&self) -> Option<&str> {
        self.service_name.as_deref()
    }

    /// 读取方法名（如 `MakeHat`）；未写入返回 `None`。
    pub fn method_name(&self) -> Option<&str> {
        self.method_name.as_deref()
    }

    /// 读取响应状态码；响应尚未发出时返回 `None`。
    pub fn status_code(&self) -> Option<StatusCode> {
        self.status_code
    }

    /// 读取请求头包；从未写入时返回空包。
    ///
    /// 返回借用而非克隆，读取方大多只做单键探测；需要修改时先 `clone()`
    /// 再经写入器提交。
    pub fn request_headers(&self) -> &HeaderMap {
        &self.request_headers
    }

    /// 读取响应头包；从未写入时返回空包。
    pub fn response_headers(&self) -> &HeaderMap {
        &self.response_headers
    }

    /// 写入包名，返回派生上下文。
    ///
    /// 运行时在路由完成后调用；值原样保存，空字符串同样合法。
    #[must_use]
    pub fn with_package_name<S>(&self, name: S) -> Self
    where
        S: Into<Cow<'static, str>>,
    {
        let mut next = self.clone();
        next.package_name = Some(name.into());
        next
    }

    /// 写入服务名，返回派生上下文。
    #[must_use]
    pub fn with_service_name<S>(&self, name: S) -> Self
    where
        S: Into<Cow<'static, str>>,
    {
        let mut next = self.clone();
        next.service_name = Some(name.into());
        next
    }

    /// 写入方法名，返回派生上下文。
    #[must_use]
    pub fn with_method_name<S>(&self, name: S) -> Self
    where
        S: Into<Cow<'static, str>>,
    {
        let mut next = self.clone();
        next.method_name = Some(name.into());
        next
    }

    /// 写入响应状态码，返回派生上下文。
    ///
    /// 服务端运行时在响应落笔时写入；数值不做合法性裁决，参见 [`StatusCode`]。
    #[must_use]
    pub fn with_status_code<C>(&self, code: C) -> Self
    where
        C: Into<StatusCode>,
    {
        let mut next = self.clone();
        next.status_code = Some(code.into());
        next
    }

    /// 以整包替换的方式写入请求头，返回派生上下文。
    ///
    /// # 教案式说明
    /// - **意图 (Why)**：客户端侧在发起调用前挂载追踪、认证等自定义头；
    ///   内容协商相关的保留头必须经由编解码配置落地，在此处整包拦截。
    /// - **契约 (What)**：
    ///   - 语义是替换而非合并：派生上下文只携带 `headers`，旧头包被整体丢弃；
    ///     需要叠加时先读出现有头包、`extend` 合并后再提交整包；
    ///   - 任何键命中 [`RESERVED_REQUEST_HEADERS`]（大小写不敏感）即整包拒绝，
    ///     错误携带保留头的规范拼写，原上下文与其头包保持原样；
    ///   - 值不做校验，协议层在发出阶段另行裁决。
    /// - **设计 (How)**：先对整包做保留头探测，探测通过才克隆自身并替换头包，
    ///   拒绝路径不产生任何中间状态。
    /// - **权衡 (Trade-offs)**：按值接收 `headers`，成功路径零额外克隆；
    ///   拒绝时头包随错误路径丢弃，调用方需要重建后重试。
    pub fn with_request_headers(&self, headers: HeaderMap) -> Result<Self> {
        if let Some(reserved) = header::find_reserved(&headers, RESERVED_REQUEST_HEADERS) {
            return Err(ContextError::reserved(reserved));
        }
        let mut next = self.clone();
        next.request_headers = headers;
        Ok(next)
    }

    /// 以整包替换的方式写入响应头，返回派生上下文。
    ///
    /// 语义与 [`with_request_headers`](Self::with_request_headers) 对称，
    /// 仅保留头清单换成 [`RESERVED_RESPONSE_HEADERS`]：响应方向只有
    /// `Content-Type` 由运行时独占。
    pub fn with_response_headers(&self, headers: HeaderMap) -> Result<Self> {
        if let Some(reserved) = header::find_reserved(&headers, RESERVED_RESPONSE_HEADERS) {
            return Err(ContextError::reserved(reserved));
        }
        let mut next = self.clone();
        next.response_headers = headers;
        Ok(next)
    }

    /// 向响应头包追加单个条目，返回派生上下文。
    ///
    /// # 教案式说明
    /// - **意图 (Why)**：服务端钩子最常见的诉求是「在既有响应头上多加一个」，
    ///   例如注入 `X-Trace-Id`；为此提供合并语义的单键入口，省去读包改包的样板。
    /// - **契约 (What)**：名字命中 [`RESERVED_RESPONSE_HEADERS`]（大小写不敏感）
    ///   即拒绝；同名键（大小写视作同名）覆盖旧值；其余条目原样保留。
    /// - **设计 (How)**：先校验名字再克隆自身，随后走 [`HeaderMap::insert`]
    ///   的大小写不敏感覆盖语义。
    pub fn with_response_header<N, V>(&self, name: N, value: V) -> Result<Self>
    where
        N: Into<HeaderName>,
        V: Into<Cow<'static, str>>,
    {
        let name = name.into();
        if let Some(reserved) = header::reserved_match(name.as_str(), RESERVED_RESPONSE_HEADERS) {
            return Err(ContextError::reserved(reserved));
        }
        let mut next = self.clone();
        next.response_headers.insert(name, value);
        Ok(next)
    }
}
