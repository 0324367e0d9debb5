//! # header 模块说明
//!
//! ## 角色定位（Why）
//! - 定义上下文承载的 HTTP 头词汇：大小写不敏感的键类型、有序头映射，
//!   以及由运行时独占管理的保留头清单；
//! - 请求头与响应头共用同一套容器，仅保留头清单不同。
//!
//! ## 设计要求（What）
//! - 键比较、查找、去重一律忽略 ASCII 大小写，但保留调用方首次写入的拼写；
//! - 值不做任何校验，非法值由协议层在发出阶段裁决；
//! - 保留头清单以规范拼写暴露为常量，错误文案与文档引用同一份数据。
//!
//! ## 扩展建议（How）
//! - 若未来需要单键多值（`Set-Cookie` 类场景），在此将值类型演进为小向量，
//!   上下文层的读写器签名可保持不变。

use alloc::borrow::Cow;
use alloc::collections::{BTreeMap, btree_map};
use alloc::string::String;
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};

/// 会被请求头写入器拒绝的保留头，规范拼写。
///
/// 这三个头由运行时依据编解码协商结果填写：`Accept` 与 `Content-Type` 决定
/// 载荷的序列化形态，`Twirp-Version` 标记线协议版本。旁路写入会制造
/// 「头与实际载荷不符」的隐蔽故障，因此在上下文入口处整包拒绝。
pub const RESERVED_REQUEST_HEADERS: &[&str] = &["Accept", "Content-Type", "Twirp-Version"];

/// 会被响应头写入器拒绝的保留头，规范拼写。
///
/// 响应方向只有 `Content-Type` 由运行时独占：它必须与响应体的实际编码一致。
/// `Accept` 在响应中本就无协议含义，不值得为它制造一次拒绝。
pub const RESERVED_RESPONSE_HEADERS: &[&str] = &["Content-Type"];

/// HTTP 头名称，比较与哈希均忽略 ASCII 大小写。
///
/// # 教案式说明
/// - **意图 (Why)**：RFC 9110 规定头名大小写不敏感，若用裸字符串作键，
///   `X-Request-Id` 与 `x-request-id` 会在映射中裂成两个条目；
/// - **契约 (What)**：内部持有 `Cow<'static, str>`，静态字面量零拷贝；
///   展示时返回构造时的原始拼写，不做规范化改写；
/// - **设计 (How)**：`Eq`/`Ord`/`Hash` 全部手工实现并统一基于逐字节小写视图，
///   三者必须同步演进，否则 `BTreeMap` 的查找与去重会失去一致性；
/// - **权衡 (Trade-offs)**：比较时逐字节转小写而非预先规范化存储，
///   省掉一次分配，代价是比较路径多一次 `to_ascii_lowercase`。
#[derive(Clone, Debug)]
pub struct HeaderName(Cow<'static, str>);

impl HeaderName {
    /// 基于任意可转换为 `Cow` 的输入创建头名，保留原始拼写。
    pub fn new<S>(name: S) -> Self
    where
        S: Into<Cow<'static, str>>,
    {
        Self(name.into())
    }

    /// 读取底层字符串切片，即构造时的原始拼写。
    pub fn as_str(&self) -> &str {
        self.0.as_ref()
    }

    /// 与另一个名字做大小写不敏感比较。
    pub fn eq_ignore_ascii_case(&self, other: &str) -> bool {
        self.0.eq_ignore_ascii_case(other)
    }
}

impl PartialEq for HeaderName {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl Eq for HeaderName {}

impl PartialOrd for HeaderName {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeaderName {
    fn cmp(&self, other: &Self) -> Ordering {
        let lhs = self.0.bytes().map(|byte| byte.to_ascii_lowercase());
        let rhs = other.0.bytes().map(|byte| byte.to_ascii_lowercase());
        lhs.cmp(rhs)
    }
}

impl Hash for HeaderName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // 与 `Eq` 保持一致：相等的键必须产生相同的哈希输入。
        for byte in self.0.bytes() {
            state.write_u8(byte.to_ascii_lowercase());
        }
    }
}

impl fmt::Display for HeaderName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&'static str> for HeaderName {
    fn from(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }
}

impl From<String> for HeaderName {
    fn from(name: String) -> Self {
        Self(Cow::Owned(name))
    }
}

impl From<Cow<'static, str>> for HeaderName {
    fn from(name: Cow<'static, str>) -> Self {
        Self(name)
    }
}

/// HTTP 头映射，使用有序映射以便稳定迭代。
///
/// # 教案式说明
/// - **意图 (Why)**：为上下文的请求头/响应头提供统一容器，键语义与
///   [`HeaderName`] 对齐，迭代顺序确定便于日志与测试断言；
/// - **契约 (What)**：
///   - 同名键（大小写视作同名）后写覆盖先写的值，键保留首次写入的拼写；
///   - 值为不透明字符串，容器不做协议校验；
///   - 读取路径（[`get`](Self::get)/[`contains_key`](Self::contains_key)）接受任意大小写。
/// - **设计 (How)**：按名查找采用线性探测而非对数查找，省去为查询参数构造
///   [`HeaderName`] 的分配；调用级头包通常只有个位数条目，线性代价可忽略。
/// - **权衡 (Trade-offs)**：头包规模若达到数百条目，应改为先构造键再走
///   `BTreeMap::get`，当前场景不为此付出复杂度。
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HeaderMap(BTreeMap<HeaderName, Cow<'static, str>>);

impl HeaderMap {
    /// 创建空的头映射。
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// 插入或覆盖键值对，返回被覆盖的旧值。
    ///
    /// 键的大小写变体视作同一条目；覆盖值时保留映射中已有键的拼写。
    pub fn insert<N, V>(&mut self, name: N, value: V) -> Option<Cow<'static, str>>
    where
        N: Into<HeaderName>,
        V: Into<Cow<'static, str>>,
    {
        self.0.insert(name.into(), value.into())
    }

    /// 按名读取值，名字大小写不敏感；缺失返回 `None`。
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(stored, _)| stored.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_ref())
    }

    /// 判断名字（大小写不敏感）是否存在。
    pub fn contains_key(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// 按名移除条目，返回被移除的值。
    pub fn remove(&mut self, name: &str) -> Option<Cow<'static, str>> {
        let key = self
            .0
            .keys()
            .find(|stored| stored.eq_ignore_ascii_case(name))
            .cloned()?;
        self.0.remove(&key)
    }

    /// 条目数量。
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// 检查是否为空。
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// 以只读方式遍历键值对，按键的小写字典序输出。
    pub fn iter(&self) -> btree_map::Iter<'_, HeaderName, Cow<'static, str>> {
        self.0.iter()
    }
}

impl IntoIterator for HeaderMap {
    type Item = (HeaderName, Cow<'static, str>);
    type IntoIter = btree_map::IntoIter<HeaderName, Cow<'static, str>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a HeaderMap {
    type Item = (&'a HeaderName, &'a Cow<'static, str>);
    type IntoIter = btree_map::Iter<'a, HeaderName, Cow<'static, str>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<N, V> Extend<(N, V)> for HeaderMap
where
    N: Into<HeaderName>,
    V: Into<Cow<'static, str>>,
{
    /// 逐条走 [`insert`](Self::insert)，维持大小写不敏感的覆盖语义。
    fn extend<I: IntoIterator<Item = (N, V)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.insert(name, value);
        }
    }
}

impl<N, V> FromIterator<(N, V)> for HeaderMap
where
    N: Into<HeaderName>,
    V: Into<Cow<'static, str>>,
{
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

/// 判断单个名字是否命中保留头清单，命中时返回清单中的规范拼写。
pub(crate) fn reserved_match<'a>(name: &str, reserved: &[&'a str]) -> Option<&'a str> {
    reserved
        .iter()
        .copied()
        .find(|candidate| candidate.eq_ignore_ascii_case(name))
}

/// 在整包头中探测保留头，返回第一个命中的规范拼写。
pub(crate) fn find_reserved<'a>(headers: &HeaderMap, reserved: &[&'a str]) -> Option<&'a str> {
    headers
        .iter()
        .find_map(|(name, _)| reserved_match(name.as_str(), reserved))
}
