//! 上下文访问器契约测试
//!
//! # 教案式导航
//! - **核心目标 (Why)**：逐项验证固定键词汇表的读写契约：缺键失败软化、
//!   写后可读回、写时复制不扰动原上下文、各键互不串扰。
//! - **整体定位 (Where)**：位于 `tests/contracts`，是运行时与中间件实现
//!   共同依赖的行为基线，任何访问器语义变更都必须先让本文件通过。
//! - **契约声明 (What)**：读取器绝不 panic；写入器返回派生副本；
//!   空字符串与「未写入」是两个可区分的状态。

use flare_context::{Context, HeaderMap, StatusCode};

/// 空上下文上读取任何键都不得 panic，统一返回「未写入」哨兵。
#[test]
fn unknown_keys_read_as_none_without_panicking() {
    let ctx = Context::new();

    assert_eq!(ctx.package_name(), None);
    assert_eq!(ctx.service_name(), None);
    assert_eq!(ctx.method_name(), None);
    assert_eq!(ctx.status_code(), None);
    assert!(ctx.request_headers().is_empty(), "请求头缺省应为空包");
    assert!(ctx.response_headers().is_empty(), "响应头缺省应为空包");
}

/// 每个键经由自己的写入器写入后，应能从派生上下文原样读回。
#[test]
fn each_key_round_trips_through_its_writer() {
    let ctx = Context::new()
        .with_package_name("twirp.example.haberdasher")
        .with_service_name("Haberdasher")
        .with_method_name("MakeHat")
        .with_status_code(200);

    assert_eq!(ctx.package_name(), Some("twirp.example.haberdasher"));
    assert_eq!(ctx.service_name(), Some("Haberdasher"));
    assert_eq!(ctx.method_name(), Some("MakeHat"));
    assert_eq!(ctx.status_code(), Some(StatusCode::new(200)));

    let request = HeaderMap::from_iter([("X-Request-Id", "req-42")]);
    let ctx = ctx
        .with_request_headers(request.clone())
        .expect("自定义请求头应被接受");
    assert_eq!(ctx.request_headers(), &request);

    let response = HeaderMap::from_iter([("X-Trace-Id", "trace-7")]);
    let ctx = ctx
        .with_response_headers(response.clone())
        .expect("自定义响应头应被接受");
    assert_eq!(ctx.response_headers(), &response);
}

/// 写入器返回派生副本，调用后原上下文的全部读数保持不变。
#[test]
fn writers_leave_the_source_context_untouched() {
    let base = Context::new()
        .with_package_name("demo.echo")
        .with_service_name("Echo")
        .with_method_name("Say")
        .with_status_code(200);
    let snapshot = base.clone();

    let _derived = base.with_method_name("Shout");
    let _derived = base.with_service_name("Mirror");
    let _derived = base.with_package_name("demo.mirror");
    let _derived = base.with_status_code(503);
    let _derived = base
        .with_request_headers(HeaderMap::from_iter([("X-Later", "1")]))
        .expect("自定义请求头应被接受");
    let _derived = base
        .with_response_header("X-Trace-Id", "trace-9")
        .expect("自定义响应头应被接受");

    assert_eq!(base, snapshot, "原上下文不得被任何写入器远程改写");
}

/// 单键写入只触达自己的键，其余键在派生上下文中保持原值。
#[test]
fn writes_touch_only_their_own_key() {
    let headers = HeaderMap::from_iter([("X-Request-Id", "req-1")]);
    let base = Context::new()
        .with_package_name("demo.echo")
        .with_service_name("Echo")
        .with_method_name("Say")
        .with_status_code(200)
        .with_request_headers(headers.clone())
        .expect("自定义请求头应被接受");

    let derived = base.with_method_name("Shout");

    assert_eq!(derived.method_name(), Some("Shout"));
    assert_eq!(derived.package_name(), Some("demo.echo"));
    assert_eq!(derived.service_name(), Some("Echo"));
    assert_eq!(derived.status_code(), Some(StatusCode::new(200)));
    assert_eq!(derived.request_headers(), &headers, "头包不应随方法名写入而变化");
}

/// 显式写入空字符串与从未写入必须可区分。
#[test]
fn empty_package_name_is_distinct_from_unset() {
    let unset = Context::new();
    let explicit = unset.with_package_name("");

    assert_eq!(unset.package_name(), None);
    assert_eq!(
        explicit.package_name(),
        Some(""),
        "无包名服务显式写入空串，读取方据此与「未注入路由」区分"
    );
}

/// 链式写入逐步累积成同一视图，后写覆盖同键旧值且不扰动他键。
#[test]
fn chained_writes_accumulate_into_one_view() {
    let step_one = Context::new().with_method_name("Echo");
    let step_two = step_one.with_service_name("Greeter");

    assert_eq!(step_two.method_name(), Some("Echo"));
    assert_eq!(step_two.service_name(), Some("Greeter"));

    let step_three = step_two.with_method_name("Say");
    assert_eq!(step_three.method_name(), Some("Say"), "同键后写覆盖先写");
    assert_eq!(step_three.service_name(), Some("Greeter"), "覆盖方法名不得影响服务名");

    // 中间态各自留存，链路上游的视图不受下游写入影响。
    assert_eq!(step_one.service_name(), None);
    assert_eq!(step_two.method_name(), Some("Echo"));
}

/// 同一父上下文派生的两个分支互不可见，父视图保持原样。
#[test]
fn derived_contexts_fork_independently() {
    let parent = Context::new().with_service_name("Haberdasher");

    let left = parent.with_method_name("MakeHat");
    let right = parent.with_method_name("ListSizes");

    assert_eq!(left.method_name(), Some("MakeHat"));
    assert_eq!(right.method_name(), Some("ListSizes"));
    assert_eq!(parent.method_name(), None, "父上下文不应看到任何分支的写入");
    assert_eq!(left.service_name(), Some("Haberdasher"));
    assert_eq!(right.service_name(), Some("Haberdasher"));
}

/// 状态码遵循同样的「后写覆盖、旧视图留存」规则。
#[test]
fn status_code_reflects_last_write() {
    let first = Context::new().with_status_code(200);
    let second = first.with_status_code(503);

    assert_eq!(first.status_code(), Some(StatusCode::new(200)));
    assert_eq!(second.status_code(), Some(StatusCode::new(503)));
    assert_eq!(second.status_code().map(u16::from), Some(503));
}
