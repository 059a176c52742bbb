//! Instruction mnemonics.
//!
//! Identity only: rendering these as text is a downstream concern. The
//! variant set covers the generated tables; regenerating the tables with a
//! wider instruction database grows this enum and nothing else.

#[allow(non_camel_case_types)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[non_exhaustive]
pub enum Mnemonic {
    Invalid,

    // Integer arithmetic and logic.
    ADD,
    ADC,
    AND,
    CMP,
    OR,
    SBB,
    SUB,
    XOR,
    TEST,
    NOT,
    NEG,
    MUL,
    IMUL,
    DIV,
    IDIV,
    INC,
    DEC,
    SHL,
    SHR,
    SAR,
    ROL,
    ROR,
    RCL,
    RCR,
    SHLD,
    SHRD,

    // Data movement.
    MOV,
    MOVSX,
    MOVSXD,
    MOVZX,
    MOVBE,
    LEA,
    XCHG,
    XADD,
    BSWAP,
    CMPXCHG,
    CMPXCHG8B,
    CMPXCHG16B,
    MOVNTI,

    // Stack.
    PUSH,
    POP,
    PUSHA,
    POPA,
    PUSHF,
    POPF,
    ENTER,
    LEAVE,

    // Flag housekeeping.
    LAHF,
    SAHF,
    CLC,
    STC,
    CMC,
    CLD,
    STD,
    CLI,
    STI,

    // Converts.
    CBW,
    CWDE,
    CDQE,
    CWD,
    CDQ,
    CQO,

    // Control flow.
    CALL,
    CALLF,
    RETURN,
    RETF,
    JMP,
    JMPF,
    IRET,
    IRETD,
    IRETQ,
    INT,
    INT1,
    INT3,
    INTO,
    LOOP,
    LOOPZ,
    LOOPNZ,
    JCXZ,
    JECXZ,
    JRCXZ,

    JO,
    JNO,
    JB,
    JNB,
    JZ,
    JNZ,
    JNA,
    JA,
    JS,
    JNS,
    JP,
    JNP,
    JL,
    JGE,
    JLE,
    JG,

    CMOVO,
    CMOVNO,
    CMOVB,
    CMOVNB,
    CMOVZ,
    CMOVNZ,
    CMOVNA,
    CMOVA,
    CMOVS,
    CMOVNS,
    CMOVP,
    CMOVNP,
    CMOVL,
    CMOVGE,
    CMOVLE,
    CMOVG,

    SETO,
    SETNO,
    SETB,
    SETAE,
    SETZ,
    SETNZ,
    SETBE,
    SETA,
    SETS,
    SETNS,
    SETP,
    SETNP,
    SETL,
    SETGE,
    SETLE,
    SETG,

    // Bit twiddling.
    BT,
    BTS,
    BTR,
    BTC,
    BSF,
    BSR,
    TZCNT,
    LZCNT,
    POPCNT,
    ADCX,
    ADOX,
    CRC32,
    ANDN,
    BLSR,
    BLSMSK,
    BLSI,
    SHLX,
    SARX,
    SHRX,

    // Strings and I/O.
    MOVS,
    CMPS,
    STOS,
    LODS,
    SCAS,
    INS,
    OUTS,
    IN,
    OUT,
    XLAT,

    // Decimal relics.
    DAA,
    DAS,
    AAA,
    AAS,
    AAM,
    AAD,

    // Legacy segmented loads.
    ARPL,
    BOUND,
    LES,
    LDS,
    LSS,
    LFS,
    LGS,

    // Misc user-level.
    NOP,
    PAUSE,
    HLT,
    WAIT,
    CPUID,
    RDTSC,
    RDTSCP,
    RDPMC,
    RDRAND,
    RDSEED,
    UD1,
    UD2,
    PREFETCHNTA,
    PREFETCHT0,
    PREFETCHT1,
    PREFETCHT2,
    SFENCE,
    LFENCE,
    MFENCE,
    CLFLUSH,

    // System.
    SYSCALL,
    SYSRET,
    SYSENTER,
    SYSEXIT,
    RDMSR,
    WRMSR,
    CLTS,
    INVD,
    WBINVD,
    INVLPG,
    SWAPGS,
    RSM,
    LAR,
    LSL,
    SLDT,
    STR,
    LLDT,
    LTR,
    VERR,
    VERW,
    SGDT,
    SIDT,
    LGDT,
    LIDT,
    SMSW,
    LMSW,
    FXSAVE,
    FXRSTOR,
    LDMXCSR,
    STMXCSR,
    XSAVE,
    XRSTOR,
    XGETBV,
    XSETBV,
    MONITOR,
    MWAIT,

    // VMX.
    VMCALL,
    VMLAUNCH,
    VMRESUME,
    VMXOFF,
    VMXON,
    VMPTRLD,
    VMPTRST,
    VMCLEAR,
    VMREAD,
    VMWRITE,

    // x87.
    FADD,
    FMUL,
    FSUB,
    FSUBR,
    FDIV,
    FDIVR,
    FCOM,
    FCOMP,
    FCOMPP,
    FUCOM,
    FUCOMP,
    FUCOMPP,
    FCOMI,
    FCOMIP,
    FUCOMI,
    FUCOMIP,
    FCMOVB,
    FCMOVE,
    FCMOVBE,
    FCMOVU,
    FCMOVNB,
    FCMOVNE,
    FCMOVNBE,
    FCMOVNU,
    FLD,
    FST,
    FSTP,
    FILD,
    FIST,
    FISTP,
    FXCH,
    FNOP,
    FCHS,
    FABS,
    FTST,
    FXAM,
    FLD1,
    FLDZ,
    FSQRT,
    FLDCW,
    FNSTCW,
    FNSTSW,
    FLDENV,
    FNSTENV,
    FRSTOR,
    FNSAVE,
    FNINIT,
    FNCLEX,

    // SSE family.
    MOVUPS,
    MOVUPD,
    MOVSS,
    MOVSD,
    MOVAPS,
    MOVAPD,
    MOVDQA,
    MOVDQU,
    MOVD,
    MOVQ,
    ADDPS,
    ADDPD,
    ADDSS,
    ADDSD,
    MULPS,
    MULPD,
    MULSS,
    MULSD,
    SUBPS,
    SUBPD,
    SUBSS,
    SUBSD,
    DIVPS,
    DIVPD,
    DIVSS,
    DIVSD,
    ANDPS,
    ANDPD,
    ANDNPS,
    ANDNPD,
    ORPS,
    ORPD,
    XORPS,
    XORPD,
    UCOMISS,
    UCOMISD,
    COMISS,
    COMISD,
    PXOR,
    PSHUFB,
    PALIGNR,
    PTEST,
    PEXTRB,
    PEXTRW,
    PEXTRD,
    PINSRB,
    PINSRW,
    PINSRD,
    PCMPISTRI,

    // AVX/AVX-512.
    VMOVUPS,
    VMOVUPD,
    VMOVSS,
    VMOVSD,
    VMOVAPS,
    VMOVAPD,
    VMOVDQA,
    VMOVDQU,
    VMOVDQA32,
    VMOVDQA64,
    VADDPS,
    VADDPD,
    VADDSS,
    VADDSD,
    VMULPS,
    VMULPD,
    VSUBPS,
    VSUBPD,
    VDIVPS,
    VDIVPD,
    VANDPS,
    VXORPS,
    VPXOR,
    VZEROUPPER,
    VZEROALL,
    VBROADCASTSS,
    VBROADCASTSD,
    VINSERTF128,
    VEXTRACTF128,
    VGATHERDPS,
    VGATHERDPD,
    VPGATHERDD,
    VPGATHERDQ,
}

impl Mnemonic {
    /// The condition a conditional instruction tests, if it is one.
    pub fn condition(self) -> Option<ConditionCode> {
        use Mnemonic::*;
        Some(match self {
            JO | CMOVO | SETO => ConditionCode::O,
            JNO | CMOVNO | SETNO => ConditionCode::NO,
            JB | CMOVB | SETB | FCMOVB => ConditionCode::B,
            JNB | CMOVNB | SETAE | FCMOVNB => ConditionCode::AE,
            JZ | CMOVZ | SETZ | FCMOVE => ConditionCode::Z,
            JNZ | CMOVNZ | SETNZ | FCMOVNE => ConditionCode::NZ,
            JNA | CMOVNA | SETBE | FCMOVBE => ConditionCode::BE,
            JA | CMOVA | SETA | FCMOVNBE => ConditionCode::A,
            JS | CMOVS | SETS => ConditionCode::S,
            JNS | CMOVNS | SETNS => ConditionCode::NS,
            JP | CMOVP | SETP | FCMOVU => ConditionCode::P,
            JNP | CMOVNP | SETNP | FCMOVNU => ConditionCode::NP,
            JL | CMOVL | SETL => ConditionCode::L,
            JGE | CMOVGE | SETGE => ConditionCode::GE,
            JLE | CMOVLE | SETLE => ConditionCode::LE,
            JG | CMOVG | SETG => ConditionCode::G,
            _ => return None,
        })
    }
}

/// The condition for a conditional instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConditionCode {
    O,
    NO,
    B,
    AE,
    Z,
    NZ,
    A,
    BE,
    S,
    NS,
    P,
    NP,
    L,
    GE,
    G,
    LE,
}
