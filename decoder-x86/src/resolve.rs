//! Operand resolution.
//!
//! Expands a matched definition's operand templates (explicit first, then
//! implicit) into concrete [`Operand`]s: register identities with banks
//! picked from the effective sizes, composed memory references with segment
//! defaulting and override rules applied, and immediates/displacements read
//! from the trailing bytes. This is the stage that knows the size-class
//! quirks: stack widths, fixed 64-bit branch targets, EVEX compressed
//! displacements, broadcast element widths.

use crate::modrm::ModRm;
use crate::operand::{
    Access, Broadcast, MaskDecorator, MemFlags, MemOperand, Operand, OperandKind, RegSpec,
    Rounding, Segment,
};
use crate::prefix::Prefixes;
use crate::tables::{InstDef, OpSpec, Sz, VsibIndex, Walk};
use crate::{Instruction, MachineMode};
use decoder::{Error, ErrorKind, Reader};

pub(crate) struct ResolveCtx<'a> {
    pub mode: MachineMode,
    pub prefixes: &'a Prefixes,
    /// Effective operand width, mandatory-prefix consumption applied.
    pub osz: u8,
    /// Effective address width.
    pub asz: u8,
    /// Address width of implicit stack references; unlike `asz` this does
    /// not follow the 67 prefix.
    pub stack_width: u8,
    /// Whether a repeat prefix retains repeat semantics (it does not when
    /// consumed as a mandatory prefix).
    pub rep_active: bool,
}

#[inline]
fn exhausted(words: &Reader) -> Error {
    Error::new(ErrorKind::BufferTooSmall, words.offset())
}

#[inline]
fn invalid(words: &Reader) -> Error {
    Error::new(ErrorKind::InvalidEncoding, words.offset())
}

pub(crate) fn operands(
    ctx: &ResolveCtx,
    walk: &Walk,
    modrm: Option<&ModRm>,
    words: &mut Reader,
    instr: &mut Instruction,
) -> Result<(), Error> {
    let def = walk.def;

    for template in def.operands.iter() {
        let op = resolve_one(ctx, def, walk, modrm, words, instr, template, false)?;
        push(instr, op);
    }
    for template in def.implicit.iter() {
        let op = resolve_one(ctx, def, walk, modrm, words, instr, template, true)?;
        push(instr, op);
    }

    // A repeat prefix turns the string accesses conditional on rCX, which
    // joins the operand list as the loop counter.
    if ctx.rep_active && def.prefixes.intersects(crate::PrefixSet::REP_ANY) {
        for i in 0..instr.operand_count as usize {
            instr.operands[i].access = instr.operands[i].access.conditional();
        }
        push(
            instr,
            Operand {
                kind: OperandKind::Register {
                    reg: RegSpec::gp(1, ctx.asz, false),
                    count: 1,
                },
                access: Access::ReadWrite,
                width: ctx.asz,
                implicit: true,
            },
        );
    }

    // EVEX decorators. Masking rides the record; a set broadcast bit means
    // embedded broadcast for memory forms and rounding/SAE for register
    // forms.
    if let Some(evex) = ctx.prefixes.evex() {
        if evex.mask_reg() != 0 {
            instr.mask = Some(MaskDecorator {
                reg: RegSpec::k(evex.mask_reg()),
                zeroing: evex.zeroing(),
            });
        }
        if evex.broadcast() && modrm.map_or(false, |m| m.direct) {
            instr.sae = true;
            instr.rounding = Some(Rounding::from_ll(evex.ll));
        }
    }

    Ok(())
}

fn push(instr: &mut Instruction, op: Operand) {
    debug_assert!((instr.operand_count as usize) < instr.operands.len());
    instr.operands[instr.operand_count as usize] = op;
    instr.operand_count += 1;
}

#[allow(clippy::too_many_arguments)]
fn resolve_one(
    ctx: &ResolveCtx,
    def: &'static InstDef,
    walk: &Walk,
    modrm: Option<&ModRm>,
    words: &mut Reader,
    instr: &mut Instruction,
    template: &crate::tables::OperandDef,
    implicit: bool,
) -> Result<Operand, Error> {
    let width = width_of(ctx, template.size);
    let access = template.access;
    let rex_byte_file = ctx.prefixes.rex().is_some();

    let kind = match template.spec {
        OpSpec::RmGp | OpSpec::RmGpBitBase => {
            let m = modrm.ok_or_else(|| invalid(words))?;
            if m.direct {
                OperandKind::Register {
                    reg: RegSpec::gp(m.rm_reg, width, rex_byte_file || m.rm_reg >= 8),
                    count: 1,
                }
            } else {
                let extra = if template.spec == OpSpec::RmGpBitBase {
                    MemFlags::BIT_BASE
                } else {
                    MemFlags::NONE
                };
                OperandKind::Memory(build_mem(ctx, def, m, width, extra, instr)?)
            }
        }
        OpSpec::RmVec => {
            let m = modrm.ok_or_else(|| invalid(words))?;
            if m.direct {
                let mut num = m.rm_reg;
                if let Some(evex) = ctx.prefixes.evex() {
                    // EVEX reuses X as the high register-select bit for
                    // register-direct rm forms.
                    if evex.x {
                        num |= 0x10;
                    }
                }
                OperandKind::Register { reg: RegSpec::vec(num, vec_width(width)), count: 1 }
            } else {
                OperandKind::Memory(build_mem(ctx, def, m, width, MemFlags::NONE, instr)?)
            }
        }
        OpSpec::RmMm => {
            let m = modrm.ok_or_else(|| invalid(words))?;
            if m.direct {
                OperandKind::Register { reg: RegSpec::mm(m.rm_reg), count: 1 }
            } else {
                OperandKind::Memory(build_mem(ctx, def, m, width, MemFlags::NONE, instr)?)
            }
        }
        OpSpec::RmMem => {
            let m = modrm.ok_or_else(|| invalid(words))?;
            if m.direct {
                // Memory-only forms (LEA, far pointers, state areas) do not
                // encode a register rm.
                return Err(invalid(words));
            }
            OperandKind::Memory(build_mem(ctx, def, m, width, MemFlags::NONE, instr)?)
        }
        OpSpec::RmMemVsib(index) => {
            let m = modrm.ok_or_else(|| invalid(words))?;
            if m.direct || !m.sib_present {
                return Err(invalid(words));
            }
            let mem = build_vsib(ctx, def, m, width, index, instr)?;
            OperandKind::Memory(mem)
        }
        OpSpec::RegGp => {
            let m = modrm.ok_or_else(|| invalid(words))?;
            OperandKind::Register {
                reg: RegSpec::gp(m.reg, width, rex_byte_file || m.reg >= 8),
                count: 1,
            }
        }
        OpSpec::RegVec => {
            let m = modrm.ok_or_else(|| invalid(words))?;
            let mut num = m.reg;
            if let Some(evex) = ctx.prefixes.evex() {
                if evex.rp {
                    num |= 0x10;
                }
            }
            OperandKind::Register { reg: RegSpec::vec(num, vec_width(width)), count: 1 }
        }
        OpSpec::RegMm => {
            let m = modrm.ok_or_else(|| invalid(words))?;
            OperandKind::Register { reg: RegSpec::mm(m.reg), count: 1 }
        }
        OpSpec::RegSeg => {
            let m = modrm.ok_or_else(|| invalid(words))?;
            if m.reg > 5 {
                return Err(invalid(words));
            }
            // A segment-register destination of CS does not encode.
            if access.may_write() && m.reg == 1 {
                return Err(invalid(words));
            }
            OperandKind::Register { reg: RegSpec::seg(m.reg), count: 1 }
        }
        OpSpec::RegCtrl => {
            let m = modrm.ok_or_else(|| invalid(words))?;
            OperandKind::Register { reg: RegSpec::cr(m.reg), count: 1 }
        }
        OpSpec::RegDbg => {
            let m = modrm.ok_or_else(|| invalid(words))?;
            OperandKind::Register { reg: RegSpec::dr(m.reg), count: 1 }
        }
        OpSpec::OpcodeReg => {
            let mut num = walk.last_byte & 7;
            if ctx.prefixes.rex_unchecked().b() {
                num |= 8;
            }
            OperandKind::Register {
                reg: RegSpec::gp(num, width, rex_byte_file || num >= 8),
                count: 1,
            }
        }
        OpSpec::VvvvGp => {
            let vvvv = vvvv_of(ctx).ok_or_else(|| invalid(words))?;
            OperandKind::Register {
                reg: RegSpec::gp(vvvv & 0x0f, width, true),
                count: 1,
            }
        }
        OpSpec::VvvvVec => {
            let vvvv = vvvv_of(ctx).ok_or_else(|| invalid(words))?;
            OperandKind::Register { reg: RegSpec::vec(vvvv, vec_width(width)), count: 1 }
        }
        OpSpec::StRm => {
            let m = modrm.ok_or_else(|| invalid(words))?;
            OperandKind::Register { reg: RegSpec::st(m.rm_bits()), count: 1 }
        }
        OpSpec::St0 => OperandKind::Register { reg: RegSpec::st(0), count: 1 },
        OpSpec::ImmU => {
            let value = read_imm(words, width, instr)? as i64;
            OperandKind::Immediate { value }
        }
        OpSpec::ImmS => {
            let value = read_imm_signed(words, width, instr)?;
            OperandKind::Immediate { value }
        }
        OpSpec::Rel => {
            let rel_width = match template.size {
                Sz::B => 1,
                _ if ctx.mode == MachineMode::Long => 4,
                _ => width,
            };
            let offset = read_imm_signed(words, rel_width, instr)?;
            return Ok(Operand {
                kind: OperandKind::Relative { offset },
                access,
                width: rel_width,
                implicit,
            });
        }
        OpSpec::Moffs => {
            let off = words.offset() as u8;
            let addr = read_wide(words, ctx.asz)?;
            instr.layout.note_disp(off, ctx.asz);
            let segment = ctx
                .prefixes
                .honored_segment(ctx.mode)
                .unwrap_or(Segment::Ds);
            OperandKind::Memory(MemOperand::absolute(segment, addr as i64, ctx.asz))
        }
        OpSpec::FarImm => {
            let offset = read_imm(words, ctx.osz.min(4), instr)? as u32;
            let segment = read_imm(words, 2, instr)? as u16;
            return Ok(Operand {
                kind: OperandKind::FarPointer { segment, offset },
                access,
                width: 2 + ctx.osz.min(4),
                implicit,
            });
        }
        OpSpec::ImmOne => OperandKind::Immediate { value: 1 },
        OpSpec::FixedGp(num) => OperandKind::Register {
            reg: RegSpec::gp(num, width, rex_byte_file && num >= 4),
            count: 1,
        },
        OpSpec::GpBlock => OperandKind::Register {
            reg: RegSpec::gp(0, width, false),
            count: 8,
        },
        OpSpec::FixedSeg(num) => OperandKind::Register { reg: RegSpec::seg(num), count: 1 },
        OpSpec::FlagsReg => {
            let reg = match ctx.mode {
                MachineMode::Long => RegSpec::from_parts(0, crate::RegisterBank::RFlags),
                MachineMode::Protected => RegSpec::from_parts(0, crate::RegisterBank::EFlags),
                MachineMode::Real => RegSpec::from_parts(0, crate::RegisterBank::Flags),
            };
            OperandKind::Flags { reg }
        }
        OpSpec::MemSi => {
            let segment = ctx
                .prefixes
                .honored_segment(ctx.mode)
                .unwrap_or(Segment::Ds);
            OperandKind::Memory(MemOperand {
                segment,
                base: Some(RegSpec::gp(6, ctx.asz, false)),
                index: None,
                scale: 1,
                disp: 0,
                disp_width: 0,
                flags: MemFlags::STRING,
            })
        }
        OpSpec::MemDi => OperandKind::Memory(MemOperand {
            // The rDI leg of a string op always uses ES; overrides do not
            // apply to it.
            segment: Segment::Es,
            base: Some(RegSpec::gp(7, ctx.asz, false)),
            index: None,
            scale: 1,
            disp: 0,
            disp_width: 0,
            flags: MemFlags::STRING,
        }),
        OpSpec::MemStack => OperandKind::Memory(MemOperand {
            segment: Segment::Ss,
            base: Some(RegSpec::gp(4, ctx.stack_width, false)),
            index: None,
            scale: 1,
            disp: 0,
            disp_width: 0,
            flags: MemFlags::STACK,
        }),
        OpSpec::MemXlat => {
            let segment = ctx
                .prefixes
                .honored_segment(ctx.mode)
                .unwrap_or(Segment::Ds);
            OperandKind::Memory(MemOperand {
                segment,
                base: Some(RegSpec::gp(3, ctx.asz, false)),
                index: None,
                scale: 1,
                disp: 0,
                disp_width: 0,
                flags: MemFlags::NONE,
            })
        }
    };

    let mut op = Operand { kind, access, width, implicit };

    // Broadcast memory forms read a single element.
    if let OperandKind::Memory(mem) = &op.kind {
        if mem.flags.contains(MemFlags::BROADCAST) {
            op.width = def.elem_width;
        }
        if instr.mem_width == 0 {
            instr.mem_width = op.width;
        }
    }

    Ok(op)
}

fn vvvv_of(ctx: &ResolveCtx) -> Option<u8> {
    if let Some(vex) = ctx.prefixes.vex() {
        return Some(vex.vvvv());
    }
    if let Some(evex) = ctx.prefixes.evex() {
        let mut num = evex.vvvv;
        if evex.vp {
            num |= 0x10;
        }
        return Some(num);
    }
    None
}

/// Resolve a size class to a byte width.
fn width_of(ctx: &ResolveCtx, size: Sz) -> u8 {
    match size {
        Sz::B => 1,
        Sz::W => 2,
        Sz::D => 4,
        Sz::Q => 8,
        Sz::T => 10,
        Sz::DQ => 16,
        Sz::V => ctx.osz,
        Sz::AV => ctx.asz,
        Sz::Z => ctx.osz.min(4),
        Sz::Y => {
            if ctx.mode == MachineMode::Long {
                8
            } else {
                4
            }
        }
        Sz::P => 2 + ctx.osz.min(8),
        Sz::VQ => {
            if ctx.mode == MachineMode::Long {
                if ctx.osz == 2 {
                    2
                } else {
                    8
                }
            } else {
                ctx.osz
            }
        }
        Sz::F64 => {
            if ctx.mode == MachineMode::Long {
                8
            } else {
                ctx.osz
            }
        }
        Sz::X => {
            let vl = ctx.prefixes.vector_width();
            if vl == 0 {
                16
            } else {
                vl
            }
        }
        Sz::M0 | Sz::ENV => 0,
        Sz::A => ctx.osz * 2,
    }
}

/// Vector bank for a register operand of `width` bytes. Full-width operands
/// (the X class already resolved against the vector length) keep their
/// width; scalar elements always live in an xmm register, even when the
/// EVEX length bits are repurposed for rounding control.
fn vec_width(width: u8) -> u8 {
    if width < 16 {
        16
    } else {
        width
    }
}

fn build_mem(
    ctx: &ResolveCtx,
    def: &'static InstDef,
    m: &ModRm,
    width: u8,
    extra: MemFlags,
    instr: &mut Instruction,
) -> Result<MemOperand, Error> {
    let form = m.mem.expect("memory form for indirect modrm");

    let mut flags = extra;
    let base = if form.rip_relative {
        flags.insert(MemFlags::RIP_RELATIVE);
        Some(if ctx.mode == MachineMode::Long { RegSpec::RIP } else { RegSpec::EIP })
    } else {
        form.base.map(|num| RegSpec::gp(num, ctx.asz, false))
    };
    let index = form.index.map(|num| RegSpec::gp(num, ctx.asz, false));

    let mut disp = m.disp;

    // EVEX disp8 is compressed: scaled by the access width, or by the
    // element width under embedded broadcast.
    if let Some(evex) = ctx.prefixes.evex() {
        if m.disp_width == 1 {
            let n = if evex.broadcast() && def.elem_width != 0 {
                def.elem_width as i64
            } else if width != 0 {
                width as i64
            } else {
                1
            };
            disp *= n;
        }
        if evex.broadcast() && def.elem_width != 0 {
            flags.insert(MemFlags::BROADCAST);
            instr.broadcast = broadcast_factor(ctx, def);
        }
    }

    let segment = effective_segment(ctx, base);

    Ok(MemOperand {
        segment,
        base,
        index,
        scale: if index.is_some() { form.scale } else { 1 },
        disp,
        disp_width: m.disp_width,
        flags,
    })
}

fn build_vsib(
    ctx: &ResolveCtx,
    def: &'static InstDef,
    m: &ModRm,
    width: u8,
    _index: VsibIndex,
    instr: &mut Instruction,
) -> Result<MemOperand, Error> {
    let mut mem = build_mem(ctx, def, m, width, MemFlags::VSIB, instr)?;

    let form = m.mem.expect("memory form for vsib");
    let mut num = form.index.unwrap_or(4);
    if let Some(evex) = ctx.prefixes.evex() {
        if evex.vp {
            num |= 0x10;
        }
    }
    let vl = ctx.prefixes.vector_width().max(16);
    mem.index = Some(RegSpec::vec(num, vl));

    Ok(mem)
}

fn broadcast_factor(ctx: &ResolveCtx, def: &'static InstDef) -> Option<Broadcast> {
    let vl = ctx.prefixes.vector_width();
    if vl == 0 || def.elem_width == 0 {
        return None;
    }
    Some(match vl / def.elem_width {
        2 => Broadcast::To2,
        4 => Broadcast::To4,
        8 => Broadcast::To8,
        _ => Broadcast::To16,
    })
}

/// Segment defaulting: SS when the base is the architectural rBP/rSP (the
/// extended r12/r13 default to DS), DS otherwise, overridden by the winning
/// honored segment prefix.
fn effective_segment(ctx: &ResolveCtx, base: Option<RegSpec>) -> Segment {
    if let Some(segment) = ctx.prefixes.honored_segment(ctx.mode) {
        return segment;
    }
    match base {
        Some(reg)
            if matches!(reg.class(), crate::RegisterClass::GeneralPurpose)
                && (reg.num() == 4 || reg.num() == 5) =>
        {
            Segment::Ss
        }
        _ => Segment::Ds,
    }
}

fn read_wide(words: &mut Reader, width: u8) -> Result<u64, Error> {
    match width {
        1 => {
            let b = words.next().ok_or_else(|| exhausted(words))?;
            Ok(b as u64)
        }
        2 => {
            let mut buf = [0u8; 2];
            words.next_n(&mut buf).ok_or_else(|| exhausted(words))?;
            Ok(u16::from_le_bytes(buf) as u64)
        }
        4 => {
            let mut buf = [0u8; 4];
            words.next_n(&mut buf).ok_or_else(|| exhausted(words))?;
            Ok(u32::from_le_bytes(buf) as u64)
        }
        8 => {
            let mut buf = [0u8; 8];
            words.next_n(&mut buf).ok_or_else(|| exhausted(words))?;
            Ok(u64::from_le_bytes(buf))
        }
        _ => unreachable!("immediate width {width}"),
    }
}

fn read_imm(words: &mut Reader, width: u8, instr: &mut Instruction) -> Result<u64, Error> {
    let off = words.offset() as u8;
    let value = read_wide(words, width)?;
    instr.layout.note_imm(off, width);
    Ok(value)
}

fn read_imm_signed(words: &mut Reader, width: u8, instr: &mut Instruction) -> Result<i64, Error> {
    let value = read_imm(words, width, instr)?;
    Ok(match width {
        1 => value as u8 as i8 as i64,
        2 => value as u16 as i16 as i64,
        4 => value as u32 as i32 as i64,
        _ => value as i64,
    })
}
