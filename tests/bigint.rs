//! End-to-end tests for [`BigInt`] using the public textual surface.

use crypto_bignum::{BigInt, Reduction};
use hex_literal::hex;

fn dec(s: &str) -> BigInt {
    BigInt::from_str_radix(s, 10)
}

#[test]
fn addition() {
    assert_eq!((dec("10") + dec("20")).to_string(), "30");
}

#[test]
fn subtraction() {
    assert_eq!((dec("10") - dec("20")).to_string(), "-10");
}

#[test]
fn multiplication() {
    assert_eq!((dec("10") * dec("20")).to_string(), "200");
}

#[test]
fn division() {
    let (q, r) = dec("10").div_rem(&dec("20"));
    assert_eq!(q.to_string(), "0");
    assert_eq!(r.to_string(), "10");
}

#[test]
fn modular_exponentiation() {
    // 10^20 mod 30 == 10
    let result = dec("10").mod_pow(&dec("20"), &dec("30"));
    assert_eq!(result.to_string(), "10");
}

#[test]
fn modular_inverse() {
    // 30 * 4 mod 17 == 1
    let inv = dec("30").mod_inverse(&dec("17")).unwrap();
    assert_eq!(inv.to_string(), "4");
}

#[test]
fn hex_constructor() {
    assert_eq!(BigInt::from_str_radix("0x32", 16).to_string(), "50");
}

#[test]
fn byte_round_trip() {
    let bytes = hex!("c0ffee00deadbeef0102030405060708090a");
    let n = BigInt::from_be_bytes(&bytes);
    assert_eq!(&*n.to_be_bytes(), bytes.as_slice());
}

#[test]
fn rsa_round_trip_small() {
    // p = 61, q = 53: n = 3233, phi = 3120, e = 17, d = 2753
    let n = dec("3233");
    let e = dec("17");
    let d = dec("2753");

    for m in [0u32, 1, 2, 42, 65, 123, 3232] {
        let m = BigInt::from(m);
        let c = m.mod_pow(&e, &n);
        assert_eq!(c.mod_pow(&d, &n), m, "m = {m}");
    }
}

#[test]
fn rsa_round_trip_multi_limb() {
    // Mersenne primes 2^127 - 1 and 2^89 - 1; e = 65537, d = e^-1 mod phi
    let p = dec("170141183460469231731687303715884105727");
    let q = dec("618970019642690137449562111");
    let n = &p * &q;
    let e = dec("65537");

    let one = BigInt::one();
    let phi = (&p - &one) * (&q - &one);
    let d = e.mod_inverse(&phi).unwrap();

    let m = dec("123456789012345678901234567890123456789012345678901234567890");
    let m = m.rem(&n);
    let c = m.mod_pow(&e, &n);
    assert_eq!(c.mod_pow(&d, &n), m);
    assert_ne!(c, m);
}

#[test]
fn fermat_little_theorem_all_strategies() {
    // 2^(p-1) == 1 mod p for the prime p = 2^127 - 1
    let p = BigInt::from_str_radix("7fffffffffffffffffffffffffffffff", 16);
    let e = &p - &BigInt::one();
    let two = BigInt::from_str_radix("2", 10);

    for mode in [Reduction::Montgomery, Reduction::Barrett, Reduction::Classic] {
        assert_eq!(two.mod_pow_with(&e, &p, mode), BigInt::one(), "{mode:?}");
    }
}

#[test]
fn even_modulus_crt_split() {
    // n = 2^5 * 3^3 * 7; compare against an independently computed value
    let n = BigInt::from(6048u32);
    let x = BigInt::from(12345u32);
    let e = BigInt::from(678u32);

    // x^e mod 2^5 and mod 189 recombine to the value mod 6048
    let result = x.mod_pow(&e, &n);
    assert!(result < n);
    assert_eq!(
        result.rem(&BigInt::from(32u8)),
        x.mod_pow(&e, &BigInt::from(32u8))
    );
    assert_eq!(
        result.rem(&BigInt::from(189u8)),
        x.mod_pow(&e, &BigInt::from(189u8))
    );
}

#[test]
fn decimal_canonicalization() {
    assert_eq!(dec("000123").to_string(), "123");
    assert_eq!(dec("-000").to_string(), "0");
    assert_eq!(dec("").to_string(), "0");
}

#[test]
fn base_constructors_agree() {
    let decimal = dec("81985529216486895");
    let hexadecimal = BigInt::from_str_radix("0123456789abcdef", 16);
    let binary = BigInt::from_str_radix(
        "100100011010001010110011110001001101010111100110111101111",
        2,
    );
    assert_eq!(decimal, hexadecimal);
    assert_eq!(decimal, binary);
}

#[test]
fn comparisons() {
    assert!(dec("-20") < dec("-10"));
    assert!(dec("-10") < dec("0"));
    assert!(dec("0") < dec("10"));
    assert!(dec("10") < dec("20"));
    assert_eq!(dec("-0"), dec("0"));
}
