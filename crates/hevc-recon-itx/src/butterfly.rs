//! 递归 partial butterfly 一维反 DCT.
//!
//! N 点反变换拆分为奇偶两半:
//! - 奇数频率输入与基矩阵奇数行直接相乘累加, 得到 `o[0..N/2]`
//! - 偶数频率输入 (源步长加倍) 递归做 N/2 点反变换, 得到 `e[0..N/2]`
//! - 输出 `y[i] = e[i] + o[i]`, `y[N/2 + i] = e[N/2 - 1 - i] - o[N/2 - 1 - i]`
//!
//! 4 点为递归终点. 所有运算均为精确整数, 结果与直接矩阵乘法逐位一致.

use crate::matrix::basis_row;

/// 单个一维变换的最大长度
pub const MAX_TX_LEN: usize = 32;

/// N 点一维反 DCT, 输出未缩放的累加值
///
/// 读取 `src[j * sstep]` (j < n), 写入 `out[0..n]`.
/// `n` 必须为 4/8/16/32, 否则 panic.
pub fn partial_butterfly(src: &[i16], sstep: usize, n: usize, out: &mut [i32]) {
    assert!(matches!(n, 4 | 8 | 16 | 32), "无效的变换长度: {n}");
    assert!(out.len() >= n, "输出缓冲区长度 {} 小于 {n}", out.len());
    assert!(
        src.len() > (n - 1) * sstep,
        "源系数长度 {} 不足, 步长 {sstep} 下需要 {}",
        src.len(),
        (n - 1) * sstep + 1
    );

    butterfly_n(src, sstep, n, out);
}

fn butterfly_n(src: &[i16], sstep: usize, n: usize, out: &mut [i32]) {
    if n == 4 {
        butterfly_4(src, sstep, out);
        return;
    }

    let half = n / 2;

    // 奇数部分
    let mut odd = [0i32; MAX_TX_LEN / 2];
    for j in (1..n).step_by(2) {
        let x = i32::from(src[j * sstep]);
        if x == 0 {
            continue;
        }
        let basis = basis_row(j, n);
        for (acc, &t) in odd[..half].iter_mut().zip(basis.iter()) {
            *acc += i32::from(t) * x;
        }
    }

    // 偶数部分: 对偶数下标输入递归做 N/2 点变换
    let mut even = [0i32; MAX_TX_LEN / 2];
    butterfly_n(src, 2 * sstep, half, &mut even[..half]);

    for i in 0..half {
        out[i] = even[i] + odd[i];
        out[half + i] = even[half - 1 - i] - odd[half - 1 - i];
    }
}

/// 4 点终点
#[inline(always)]
fn butterfly_4(src: &[i16], sstep: usize, out: &mut [i32]) {
    let x0 = i32::from(src[0]);
    let x1 = i32::from(src[sstep]);
    let x2 = i32::from(src[2 * sstep]);
    let x3 = i32::from(src[3 * sstep]);

    let t0 = basis_row(0, 4);
    let t1 = basis_row(1, 4);
    let t2 = basis_row(2, 4);
    let t3 = basis_row(3, 4);

    let e0 = i32::from(t0[0]) * x0 + i32::from(t2[0]) * x2;
    let e1 = i32::from(t0[1]) * x0 + i32::from(t2[1]) * x2;
    let o0 = i32::from(t1[0]) * x1 + i32::from(t3[0]) * x3;
    let o1 = i32::from(t1[1]) * x1 + i32::from(t3[1]) * x3;

    out[0] = e0 + o0;
    out[1] = e1 + o1;
    out[2] = e1 - o1;
    out[3] = e0 - o0;
}
