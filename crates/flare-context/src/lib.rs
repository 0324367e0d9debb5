#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![doc = "flare-context: Twirp 调用链路的请求级元数据契约。"]
#![doc = ""]
#![doc = "== 职责边界 =="]
#![doc = "本 Crate 只定义「一次调用随身携带什么元数据、如何读写」：路由身份（包/服务/方法名）、响应状态码，以及请求/响应两个方向的头包。"]
#![doc = "取消、截止时间等生命周期语义由运行时 crate 的调用上下文承担；这里是纯数据契约，不持锁、不做 IO、不依赖异步运行时。"]
#![doc = ""]
#![doc = "== 内存分配依赖 =="]
#![doc = "`flare-context` 定位于 `no_std + alloc` 场景：头映射与动态键值依赖 [`alloc`] 中的 `BTreeMap`、`String` 等类型。"]
#![doc = "纯 `no_std`（无分配器）环境暂不支持；`std` Feature 仅额外接入 `thiserror` 以兼容 `std::error::Error` 生态。"]

extern crate alloc;

pub mod context;
pub mod error;
pub mod header;
pub mod prelude;
pub mod status;

pub use context::Context;
pub use error::{ContextError, Result, codes};
pub use header::{HeaderMap, HeaderName, RESERVED_REQUEST_HEADERS, RESERVED_RESPONSE_HEADERS};
pub use status::StatusCode;
