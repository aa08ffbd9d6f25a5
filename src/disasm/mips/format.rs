//! Assembler-style operand text: `$`-prefixed registers, `offset($base)`
//! memory, hex immediates above 9.

use std::fmt::Write;

use crate::core::instruction::{Operand, OperandKind};
use crate::disasm::mips::tables::{Entry, Loc};
use crate::disasm::x86::hex_or_small;

/// Signed immediate: `-0x20`, `-8`, `7`, `0x1c`.
pub fn signed_imm(value: i64) -> String {
    if value < 0 {
        format!("-{}", hex_or_small(value.unsigned_abs()))
    } else {
        hex_or_small(value as u64)
    }
}

fn write_operand(out: &mut String, loc: Loc, op: &Operand) {
    match (loc, &op.kind) {
        (_, OperandKind::Register(reg)) => {
            let _ = write!(out, "${reg}");
        }
        (_, OperandKind::Memory(mem)) => {
            let _ = write!(out, "{}(${})", signed_imm(mem.disp), mem.base);
        }
        (Loc::RawRd, OperandKind::Immediate(n)) => {
            let _ = write!(out, "${n}");
        }
        (Loc::Br16 | Loc::Br21 | Loc::Br26 | Loc::Jump26 | Loc::Pc19, OperandKind::Immediate(v)) => {
            let target = if op.size >= 64 {
                *v as u64
            } else {
                (*v as u64) & 0xffff_ffff
            };
            out.push_str(&hex_or_small(target));
        }
        (_, OperandKind::Immediate(v)) => out.push_str(&signed_imm(*v)),
        (_, OperandKind::FloatImmediate(v)) => {
            let _ = write!(out, "{v}");
        }
    }
}

/// Render the operand list of a decoded instruction.
pub fn op_str(entry: &Entry, operands: &[Operand]) -> String {
    let mut out = String::new();
    for (i, (spec, op)) in entry.ops.iter().zip(operands).enumerate() {
        // a zero trap code is implied
        if spec.loc == Loc::Code10 && op.imm() == Some(0) {
            continue;
        }
        if i > 0 {
            out.push_str(", ");
        }
        write_operand(&mut out, spec.loc, op);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signed_imm() {
        assert_eq!(signed_imm(-0x20), "-0x20");
        assert_eq!(signed_imm(-8), "-8");
        assert_eq!(signed_imm(7), "7");
        assert_eq!(signed_imm(0x1c), "0x1c");
        assert_eq!(signed_imm(i64::MIN), "-0x8000000000000000");
    }
}
