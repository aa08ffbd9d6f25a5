//! Intel-syntax operand text.

use std::fmt::Write;

use crate::core::instruction::{MemoryRef, Operand, OperandKind};
use crate::disasm::x86::context::X86Context;
use crate::disasm::x86::tables::{Entry, L};

/// `ptr` size keyword for a memory operand of `bits`.
pub fn size_name(bits: u16) -> Option<&'static str> {
    Some(match bits {
        8 => "byte",
        16 => "word",
        32 => "dword",
        48 => "fword",
        64 => "qword",
        80 => "xword",
        128 => "xmmword",
        256 => "ymmword",
        512 => "zmmword",
        _ => return None,
    })
}

/// Immediates print in decimal up to 9, in hex above.
pub fn hex_or_small(value: u64) -> String {
    if value <= 9 {
        value.to_string()
    } else {
        format!("0x{value:x}")
    }
}

fn mask_to(value: i64, bits: u16) -> u64 {
    if bits == 0 || bits >= 64 {
        value as u64
    } else {
        (value as u64) & ((1u64 << bits) - 1)
    }
}

fn write_memory(out: &mut String, mem: &MemoryRef, size: u16, asz: u16) {
    if let Some(name) = size_name(size) {
        let _ = write!(out, "{name} ptr ");
    }
    if mem.segment.is_valid() {
        let _ = write!(out, "{}:", mem.segment);
    }
    out.push('[');
    let mut terms = false;
    if mem.base.is_valid() {
        out.push_str(mem.base.name());
        terms = true;
    }
    if mem.index.is_valid() {
        if terms {
            out.push_str(" + ");
        }
        out.push_str(mem.index.name());
        if let Some(scale) = mem.reported_scale() {
            let _ = write!(out, "*{scale}");
        }
        terms = true;
    }
    if !terms {
        out.push_str(&hex_or_small(mask_to(mem.disp, asz)));
    } else if mem.disp < 0 {
        let _ = write!(out, " - {}", hex_or_small(mem.disp.unsigned_abs()));
    } else if mem.disp > 0 {
        let _ = write!(out, " + {}", hex_or_small(mem.disp as u64));
    }
    out.push(']');
}

fn write_operand(out: &mut String, op: &Operand, asz: u16) {
    match op.kind {
        OperandKind::Register(reg) => out.push_str(reg.name()),
        OperandKind::Immediate(value) => out.push_str(&hex_or_small(mask_to(value, op.size))),
        OperandKind::Memory(ref mem) => {
            write_memory(out, mem, op.size, asz);
            if let Some(bcast) = op.avx_bcast {
                let _ = write!(out, "{{{bcast}}}");
            }
        }
        OperandKind::FloatImmediate(value) => {
            let _ = write!(out, "{value}");
        }
    }
    if op.mask.is_valid() {
        let _ = write!(out, " {{{}}}", op.mask);
    }
    if op.avx_zero_opmask {
        out.push_str(" {z}");
    }
}

/// Render the operand list of a decoded instruction.
pub fn op_str(ctx: &X86Context, entry: &Entry, operands: &[Operand]) -> String {
    let mut out = String::new();
    if entry.ops.first().is_some_and(|op| op.loc == L::FarPtr) {
        if let [selector, offset] = operands {
            write_operand(&mut out, selector, ctx.asz);
            out.push(':');
            write_operand(&mut out, offset, ctx.asz);
            return out;
        }
    }
    for (i, op) in operands.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        write_operand(&mut out, op, ctx.asz);
    }
    if let Some(rm) = ctx.rounding {
        let _ = write!(out, ", {{{rm}-sae}}");
    } else if ctx.sae {
        out.push_str(", {sae}");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::instruction::Access;
    use crate::core::register::Register;
    use crate::core::x86::{AvxBroadcast, X86Reg};

    fn render(op: Operand) -> String {
        let mut out = String::new();
        write_operand(&mut out, &op, 64);
        out
    }

    #[test]
    fn test_immediates() {
        assert_eq!(render(Operand::immediate(9, 32)), "9");
        assert_eq!(render(Operand::immediate(10, 32)), "0xa");
        assert_eq!(render(Operand::immediate(-1, 8)), "0xff");
        assert_eq!(render(Operand::immediate(-1, 64)), "0xffffffffffffffff");
    }

    #[test]
    fn test_memory_forms() {
        let mem = MemoryRef {
            base: X86Reg::Rbp.into(),
            disp: -8,
            ..Default::default()
        };
        assert_eq!(
            render(Operand::memory(mem, 64, Access::Read)),
            "qword ptr [rbp - 8]"
        );

        let mem = MemoryRef {
            segment: X86Reg::Fs.into(),
            index: X86Reg::Rcx.into(),
            scale: 8,
            disp: 0x28,
            ..Default::default()
        };
        assert_eq!(
            render(Operand::memory(mem, 32, Access::Read)),
            "dword ptr fs:[rcx*8 + 0x28]"
        );

        let mem = MemoryRef {
            disp: 0x1000,
            ..Default::default()
        };
        assert_eq!(render(Operand::memory(mem, 0, Access::None)), "[0x1000]");
    }

    #[test]
    fn test_evex_decorations() {
        let mut dest = Operand::register(X86Reg::Zmm0, 512, Access::Write);
        dest.mask = X86Reg::K1.into();
        dest.avx_zero_opmask = true;
        assert_eq!(render(dest), "zmm0 {k1} {z}");

        let mem = MemoryRef {
            base: X86Reg::Rax.into(),
            ..Default::default()
        };
        let mut src = Operand::memory(mem, 32, Access::Read);
        src.avx_bcast = Some(AvxBroadcast::OneTo16);
        assert_eq!(render(src), "dword ptr [rax]{1to16}");
        assert_eq!(Register::Invalid.name(), "");
    }
}
