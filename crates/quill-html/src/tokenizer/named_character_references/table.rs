//! The complete WHATWG named character reference table.
//!
//! Generated from <https://html.spec.whatwg.org/entities.json>: one row per
//! name, with the trailing `;` stripped and `legacy` set for the names that
//! also appear there without it.

/// `(name, replacement, legacy)`, sorted by name.
pub(super) const NAMED_REFERENCES: &[(&str, &str, bool)] = &[
    ("AElig", "\u{00C6}", true),
    ("AMP", "&", true),
    ("Aacute", "\u{00C1}", true),
    ("Abreve", "\u{0102}", false),
    ("Acirc", "\u{00C2}", true),
    ("Acy", "\u{0410}", false),
    ("Afr", "\u{1D504}", false),
    ("Agrave", "\u{00C0}", true),
    ("Alpha", "\u{0391}", false),
    ("Amacr", "\u{0100}", false),
    ("And", "\u{2A53}", false),
    ("Aogon", "\u{0104}", false),
    ("Aopf", "\u{1D538}", false),
    ("ApplyFunction", "\u{2061}", false),
    ("Aring", "\u{00C5}", true),
    ("Ascr", "\u{1D49C}", false),
    ("Assign", "\u{2254}", false),
    ("Atilde", "\u{00C3}", true),
    ("Auml", "\u{00C4}", true),
    ("Backslash", "\u{2216}", false),
    ("Barv", "\u{2AE7}", false),
    ("Barwed", "\u{2306}", false),
    ("Bcy", "\u{0411}", false),
    ("Because", "\u{2235}", false),
    ("Bernoullis", "\u{212C}", false),
    ("Beta", "\u{0392}", false),
    ("Bfr", "\u{1D505}", false),
    ("Bopf", "\u{1D539}", false),
    ("Breve", "\u{02D8}", false),
    ("Bscr", "\u{212C}", false),
    ("Bumpeq", "\u{224E}", false),
    ("CHcy", "\u{0427}", false),
    ("COPY", "\u{00A9}", true),
    ("Cacute", "\u{0106}", false),
    ("Cap", "\u{22D2}", false),
    ("CapitalDifferentialD", "\u{2145}", false),
    ("Cayleys", "\u{212D}", false),
    ("Ccaron", "\u{010C}", false),
    ("Ccedil", "\u{00C7}", true),
    ("Ccirc", "\u{0108}", false),
    ("Cconint", "\u{2230}", false),
    ("Cdot", "\u{010A}", false),
    ("Cedilla", "\u{00B8}", false),
    ("CenterDot", "\u{00B7}", false),
    ("Cfr", "\u{212D}", false),
    ("Chi", "\u{03A7}", false),
    ("CircleDot", "\u{2299}", false),
    ("CircleMinus", "\u{2296}", false),
    ("CirclePlus", "\u{2295}", false),
    ("CircleTimes", "\u{2297}", false),
    ("ClockwiseContourIntegral", "\u{2232}", false),
    ("CloseCurlyDoubleQuote", "\u{201D}", false),
    ("CloseCurlyQuote", "\u{2019}", false),
    ("Colon", "\u{2237}", false),
    ("Colone", "\u{2A74}", false),
    ("Congruent", "\u{2261}", false),
    ("Conint", "\u{222F}", false),
    ("ContourIntegral", "\u{222E}", false),
    ("Copf", "\u{2102}", false),
    ("Coproduct", "\u{2210}", false),
    ("CounterClockwiseContourIntegral", "\u{2233}", false),
    ("Cross", "\u{2A2F}", false),
    ("Cscr", "\u{1D49E}", false),
    ("Cup", "\u{22D3}", false),
    ("CupCap", "\u{224D}", false),
    ("DD", "\u{2145}", false),
    ("DDotrahd", "\u{2911}", false),
    ("DJcy", "\u{0402}", false),
    ("DScy", "\u{0405}", false),
    ("DZcy", "\u{040F}", false),
    ("Dagger", "\u{2021}", false),
    ("Darr", "\u{21A1}", false),
    ("Dashv", "\u{2AE4}", false),
    ("Dcaron", "\u{010E}", false),
    ("Dcy", "\u{0414}", false),
    ("Del", "\u{2207}", false),
    ("Delta", "\u{0394}", false),
    ("Dfr", "\u{1D507}", false),
    ("DiacriticalAcute", "\u{00B4}", false),
    ("DiacriticalDot", "\u{02D9}", false),
    ("DiacriticalDoubleAcute", "\u{02DD}", false),
    ("DiacriticalGrave", "`", false),
    ("DiacriticalTilde", "\u{02DC}", false),
    ("Diamond", "\u{22C4}", false),
    ("DifferentialD", "\u{2146}", false),
    ("Dopf", "\u{1D53B}", false),
    ("Dot", "\u{00A8}", false),
    ("DotDot", "\u{20DC}", false),
    ("DotEqual", "\u{2250}", false),
    ("DoubleContourIntegral", "\u{222F}", false),
    ("DoubleDot", "\u{00A8}", false),
    ("DoubleDownArrow", "\u{21D3}", false),
    ("DoubleLeftArrow", "\u{21D0}", false),
    ("DoubleLeftRightArrow", "\u{21D4}", false),
    ("DoubleLeftTee", "\u{2AE4}", false),
    ("DoubleLongLeftArrow", "\u{27F8}", false),
    ("DoubleLongLeftRightArrow", "\u{27FA}", false),
    ("DoubleLongRightArrow", "\u{27F9}", false),
    ("DoubleRightArrow", "\u{21D2}", false),
    ("DoubleRightTee", "\u{22A8}", false),
    ("DoubleUpArrow", "\u{21D1}", false),
    ("DoubleUpDownArrow", "\u{21D5}", false),
    ("DoubleVerticalBar", "\u{2225}", false),
    ("DownArrow", "\u{2193}", false),
    ("DownArrowBar", "\u{2913}", false),
    ("DownArrowUpArrow", "\u{21F5}", false),
    ("DownBreve", "\u{0311}", false),
    ("DownLeftRightVector", "\u{2950}", false),
    ("DownLeftTeeVector", "\u{295E}", false),
    ("DownLeftVector", "\u{21BD}", false),
    ("DownLeftVectorBar", "\u{2956}", false),
    ("DownRightTeeVector", "\u{295F}", false),
    ("DownRightVector", "\u{21C1}", false),
    ("DownRightVectorBar", "\u{2957}", false),
    ("DownTee", "\u{22A4}", false),
    ("DownTeeArrow", "\u{21A7}", false),
    ("Downarrow", "\u{21D3}", false),
    ("Dscr", "\u{1D49F}", false),
    ("Dstrok", "\u{0110}", false),
    ("ENG", "\u{014A}", false),
    ("ETH", "\u{00D0}", true),
    ("Eacute", "\u{00C9}", true),
    ("Ecaron", "\u{011A}", false),
    ("Ecirc", "\u{00CA}", true),
    ("Ecy", "\u{042D}", false),
    ("Edot", "\u{0116}", false),
    ("Efr", "\u{1D508}", false),
    ("Egrave", "\u{00C8}", true),
    ("Element", "\u{2208}", false),
    ("Emacr", "\u{0112}", false),
    ("EmptySmallSquare", "\u{25FB}", false),
    ("EmptyVerySmallSquare", "\u{25AB}", false),
    ("Eogon", "\u{0118}", false),
    ("Eopf", "\u{1D53C}", false),
    ("Epsilon", "\u{0395}", false),
    ("Equal", "\u{2A75}", false),
    ("EqualTilde", "\u{2242}", false),
    ("Equilibrium", "\u{21CC}", false),
    ("Escr", "\u{2130}", false),
    ("Esim", "\u{2A73}", false),
    ("Eta", "\u{0397}", false),
    ("Euml", "\u{00CB}", true),
    ("Exists", "\u{2203}", false),
    ("ExponentialE", "\u{2147}", false),
    ("Fcy", "\u{0424}", false),
    ("Ffr", "\u{1D509}", false),
    ("FilledSmallSquare", "\u{25FC}", false),
    ("FilledVerySmallSquare", "\u{25AA}", false),
    ("Fopf", "\u{1D53D}", false),
    ("ForAll", "\u{2200}", false),
    ("Fouriertrf", "\u{2131}", false),
    ("Fscr", "\u{2131}", false),
    ("GJcy", "\u{0403}", false),
    ("GT", ">", true),
    ("Gamma", "\u{0393}", false),
    ("Gammad", "\u{03DC}", false),
    ("Gbreve", "\u{011E}", false),
    ("Gcedil", "\u{0122}", false),
    ("Gcirc", "\u{011C}", false),
    ("Gcy", "\u{0413}", false),
    ("Gdot", "\u{0120}", false),
    ("Gfr", "\u{1D50A}", false),
    ("Gg", "\u{22D9}", false),
    ("Gopf", "\u{1D53E}", false),
    ("GreaterEqual", "\u{2265}", false),
    ("GreaterEqualLess", "\u{22DB}", false),
    ("GreaterFullEqual", "\u{2267}", false),
    ("GreaterGreater", "\u{2AA2}", false),
    ("GreaterLess", "\u{2277}", false),
    ("GreaterSlantEqual", "\u{2A7E}", false),
    ("GreaterTilde", "\u{2273}", false),
    ("Gscr", "\u{1D4A2}", false),
    ("Gt", "\u{226B}", false),
    ("HARDcy", "\u{042A}", false),
    ("Hacek", "\u{02C7}", false),
    ("Hat", "^", false),
    ("Hcirc", "\u{0124}", false),
    ("Hfr", "\u{210C}", false),
    ("HilbertSpace", "\u{210B}", false),
    ("Hopf", "\u{210D}", false),
    ("HorizontalLine", "\u{2500}", false),
    ("Hscr", "\u{210B}", false),
    ("Hstrok", "\u{0126}", false),
    ("HumpDownHump", "\u{224E}", false),
    ("HumpEqual", "\u{224F}", false),
    ("IEcy", "\u{0415}", false),
    ("IJlig", "\u{0132}", false),
    ("IOcy", "\u{0401}", false),
    ("Iacute", "\u{00CD}", true),
    ("Icirc", "\u{00CE}", true),
    ("Icy", "\u{0418}", false),
    ("Idot", "\u{0130}", false),
    ("Ifr", "\u{2111}", false),
    ("Igrave", "\u{00CC}", true),
    ("Im", "\u{2111}", false),
    ("Imacr", "\u{012A}", false),
    ("ImaginaryI", "\u{2148}", false),
    ("Implies", "\u{21D2}", false),
    ("Int", "\u{222C}", false),
    ("Integral", "\u{222B}", false),
    ("Intersection", "\u{22C2}", false),
    ("InvisibleComma", "\u{2063}", false),
    ("InvisibleTimes", "\u{2062}", false),
    ("Iogon", "\u{012E}", false),
    ("Iopf", "\u{1D540}", false),
    ("Iota", "\u{0399}", false),
    ("Iscr", "\u{2110}", false),
    ("Itilde", "\u{0128}", false),
    ("Iukcy", "\u{0406}", false),
    ("Iuml", "\u{00CF}", true),
    ("Jcirc", "\u{0134}", false),
    ("Jcy", "\u{0419}", false),
    ("Jfr", "\u{1D50D}", false),
    ("Jopf", "\u{1D541}", false),
    ("Jscr", "\u{1D4A5}", false),
    ("Jsercy", "\u{0408}", false),
    ("Jukcy", "\u{0404}", false),
    ("KHcy", "\u{0425}", false),
    ("KJcy", "\u{040C}", false),
    ("Kappa", "\u{039A}", false),
    ("Kcedil", "\u{0136}", false),
    ("Kcy", "\u{041A}", false),
    ("Kfr", "\u{1D50E}", false),
    ("Kopf", "\u{1D542}", false),
    ("Kscr", "\u{1D4A6}", false),
    ("LJcy", "\u{0409}", false),
    ("LT", "<", true),
    ("Lacute", "\u{0139}", false),
    ("Lambda", "\u{039B}", false),
    ("Lang", "\u{27EA}", false),
    ("Laplacetrf", "\u{2112}", false),
    ("Larr", "\u{219E}", false),
    ("Lcaron", "\u{013D}", false),
    ("Lcedil", "\u{013B}", false),
    ("Lcy", "\u{041B}", false),
    ("LeftAngleBracket", "\u{27E8}", false),
    ("LeftArrow", "\u{2190}", false),
    ("LeftArrowBar", "\u{21E4}", false),
    ("LeftArrowRightArrow", "\u{21C6}", false),
    ("LeftCeiling", "\u{2308}", false),
    ("LeftDoubleBracket", "\u{27E6}", false),
    ("LeftDownTeeVector", "\u{2961}", false),
    ("LeftDownVector", "\u{21C3}", false),
    ("LeftDownVectorBar", "\u{2959}", false),
    ("LeftFloor", "\u{230A}", false),
    ("LeftRightArrow", "\u{2194}", false),
    ("LeftRightVector", "\u{294E}", false),
    ("LeftTee", "\u{22A3}", false),
    ("LeftTeeArrow", "\u{21A4}", false),
    ("LeftTeeVector", "\u{295A}", false),
    ("LeftTriangle", "\u{22B2}", false),
    ("LeftTriangleBar", "\u{29CF}", false),
    ("LeftTriangleEqual", "\u{22B4}", false),
    ("LeftUpDownVector", "\u{2951}", false),
    ("LeftUpTeeVector", "\u{2960}", false),
    ("LeftUpVector", "\u{21BF}", false),
    ("LeftUpVectorBar", "\u{2958}", false),
    ("LeftVector", "\u{21BC}", false),
    ("LeftVectorBar", "\u{2952}", false),
    ("Leftarrow", "\u{21D0}", false),
    ("Leftrightarrow", "\u{21D4}", false),
    ("LessEqualGreater", "\u{22DA}", false),
    ("LessFullEqual", "\u{2266}", false),
    ("LessGreater", "\u{2276}", false),
    ("LessLess", "\u{2AA1}", false),
    ("LessSlantEqual", "\u{2A7D}", false),
    ("LessTilde", "\u{2272}", false),
    ("Lfr", "\u{1D50F}", false),
    ("Ll", "\u{22D8}", false),
    ("Lleftarrow", "\u{21DA}", false),
    ("Lmidot", "\u{013F}", false),
    ("LongLeftArrow", "\u{27F5}", false),
    ("LongLeftRightArrow", "\u{27F7}", false),
    ("LongRightArrow", "\u{27F6}", false),
    ("Longleftarrow", "\u{27F8}", false),
    ("Longleftrightarrow", "\u{27FA}", false),
    ("Longrightarrow", "\u{27F9}", false),
    ("Lopf", "\u{1D543}", false),
    ("LowerLeftArrow", "\u{2199}", false),
    ("LowerRightArrow", "\u{2198}", false),
    ("Lscr", "\u{2112}", false),
    ("Lsh", "\u{21B0}", false),
    ("Lstrok", "\u{0141}", false),
    ("Lt", "\u{226A}", false),
    ("Map", "\u{2905}", false),
    ("Mcy", "\u{041C}", false),
    ("MediumSpace", "\u{205F}", false),
    ("Mellintrf", "\u{2133}", false),
    ("Mfr", "\u{1D510}", false),
    ("MinusPlus", "\u{2213}", false),
    ("Mopf", "\u{1D544}", false),
    ("Mscr", "\u{2133}", false),
    ("Mu", "\u{039C}", false),
    ("NJcy", "\u{040A}", false),
    ("Nacute", "\u{0143}", false),
    ("Ncaron", "\u{0147}", false),
    ("Ncedil", "\u{0145}", false),
    ("Ncy", "\u{041D}", false),
    ("NegativeMediumSpace", "\u{200B}", false),
    ("NegativeThickSpace", "\u{200B}", false),
    ("NegativeThinSpace", "\u{200B}", false),
    ("NegativeVeryThinSpace", "\u{200B}", false),
    ("NestedGreaterGreater", "\u{226B}", false),
    ("NestedLessLess", "\u{226A}", false),
    ("NewLine", "\n", false),
    ("Nfr", "\u{1D511}", false),
    ("NoBreak", "\u{2060}", false),
    ("NonBreakingSpace", "\u{00A0}", false),
    ("Nopf", "\u{2115}", false),
    ("Not", "\u{2AEC}", false),
    ("NotCongruent", "\u{2262}", false),
    ("NotCupCap", "\u{226D}", false),
    ("NotDoubleVerticalBar", "\u{2226}", false),
    ("NotElement", "\u{2209}", false),
    ("NotEqual", "\u{2260}", false),
    ("NotEqualTilde", "\u{2242}\u{0338}", false),
    ("NotExists", "\u{2204}", false),
    ("NotGreater", "\u{226F}", false),
    ("NotGreaterEqual", "\u{2271}", false),
    ("NotGreaterFullEqual", "\u{2267}\u{0338}", false),
    ("NotGreaterGreater", "\u{226B}\u{0338}", false),
    ("NotGreaterLess", "\u{2279}", false),
    ("NotGreaterSlantEqual", "\u{2A7E}\u{0338}", false),
    ("NotGreaterTilde", "\u{2275}", false),
    ("NotHumpDownHump", "\u{224E}\u{0338}", false),
    ("NotHumpEqual", "\u{224F}\u{0338}", false),
    ("NotLeftTriangle", "\u{22EA}", false),
    ("NotLeftTriangleBar", "\u{29CF}\u{0338}", false),
    ("NotLeftTriangleEqual", "\u{22EC}", false),
    ("NotLess", "\u{226E}", false),
    ("NotLessEqual", "\u{2270}", false),
    ("NotLessGreater", "\u{2278}", false),
    ("NotLessLess", "\u{226A}\u{0338}", false),
    ("NotLessSlantEqual", "\u{2A7D}\u{0338}", false),
    ("NotLessTilde", "\u{2274}", false),
    ("NotNestedGreaterGreater", "\u{2AA2}\u{0338}", false),
    ("NotNestedLessLess", "\u{2AA1}\u{0338}", false),
    ("NotPrecedes", "\u{2280}", false),
    ("NotPrecedesEqual", "\u{2AAF}\u{0338}", false),
    ("NotPrecedesSlantEqual", "\u{22E0}", false),
    ("NotReverseElement", "\u{220C}", false),
    ("NotRightTriangle", "\u{22EB}", false),
    ("NotRightTriangleBar", "\u{29D0}\u{0338}", false),
    ("NotRightTriangleEqual", "\u{22ED}", false),
    ("NotSquareSubset", "\u{228F}\u{0338}", false),
    ("NotSquareSubsetEqual", "\u{22E2}", false),
    ("NotSquareSuperset", "\u{2290}\u{0338}", false),
    ("NotSquareSupersetEqual", "\u{22E3}", false),
    ("NotSubset", "\u{2282}\u{20D2}", false),
    ("NotSubsetEqual", "\u{2288}", false),
    ("NotSucceeds", "\u{2281}", false),
    ("NotSucceedsEqual", "\u{2AB0}\u{0338}", false),
    ("NotSucceedsSlantEqual", "\u{22E1}", false),
    ("NotSucceedsTilde", "\u{227F}\u{0338}", false),
    ("NotSuperset", "\u{2283}\u{20D2}", false),
    ("NotSupersetEqual", "\u{2289}", false),
    ("NotTilde", "\u{2241}", false),
    ("NotTildeEqual", "\u{2244}", false),
    ("NotTildeFullEqual", "\u{2247}", false),
    ("NotTildeTilde", "\u{2249}", false),
    ("NotVerticalBar", "\u{2224}", false),
    ("Nscr", "\u{1D4A9}", false),
    ("Ntilde", "\u{00D1}", true),
    ("Nu", "\u{039D}", false),
    ("OElig", "\u{0152}", false),
    ("Oacute", "\u{00D3}", true),
    ("Ocirc", "\u{00D4}", true),
    ("Ocy", "\u{041E}", false),
    ("Odblac", "\u{0150}", false),
    ("Ofr", "\u{1D512}", false),
    ("Ograve", "\u{00D2}", true),
    ("Omacr", "\u{014C}", false),
    ("Omega", "\u{03A9}", false),
    ("Omicron", "\u{039F}", false),
    ("Oopf", "\u{1D546}", false),
    ("OpenCurlyDoubleQuote", "\u{201C}", false),
    ("OpenCurlyQuote", "\u{2018}", false),
    ("Or", "\u{2A54}", false),
    ("Oscr", "\u{1D4AA}", false),
    ("Oslash", "\u{00D8}", true),
    ("Otilde", "\u{00D5}", true),
    ("Otimes", "\u{2A37}", false),
    ("Ouml", "\u{00D6}", true),
    ("OverBar", "\u{203E}", false),
    ("OverBrace", "\u{23DE}", false),
    ("OverBracket", "\u{23B4}", false),
    ("OverParenthesis", "\u{23DC}", false),
    ("PartialD", "\u{2202}", false),
    ("Pcy", "\u{041F}", false),
    ("Pfr", "\u{1D513}", false),
    ("Phi", "\u{03A6}", false),
    ("Pi", "\u{03A0}", false),
    ("PlusMinus", "\u{00B1}", false),
    ("Poincareplane", "\u{210C}", false),
    ("Popf", "\u{2119}", false),
    ("Pr", "\u{2ABB}", false),
    ("Precedes", "\u{227A}", false),
    ("PrecedesEqual", "\u{2AAF}", false),
    ("PrecedesSlantEqual", "\u{227C}", false),
    ("PrecedesTilde", "\u{227E}", false),
    ("Prime", "\u{2033}", false),
    ("Product", "\u{220F}", false),
    ("Proportion", "\u{2237}", false),
    ("Proportional", "\u{221D}", false),
    ("Pscr", "\u{1D4AB}", false),
    ("Psi", "\u{03A8}", false),
    ("QUOT", "\"", true),
    ("Qfr", "\u{1D514}", false),
    ("Qopf", "\u{211A}", false),
    ("Qscr", "\u{1D4AC}", false),
    ("RBarr", "\u{2910}", false),
    ("REG", "\u{00AE}", true),
    ("Racute", "\u{0154}", false),
    ("Rang", "\u{27EB}", false),
    ("Rarr", "\u{21A0}", false),
    ("Rarrtl", "\u{2916}", false),
    ("Rcaron", "\u{0158}", false),
    ("Rcedil", "\u{0156}", false),
    ("Rcy", "\u{0420}", false),
    ("Re", "\u{211C}", false),
    ("ReverseElement", "\u{220B}", false),
    ("ReverseEquilibrium", "\u{21CB}", false),
    ("ReverseUpEquilibrium", "\u{296F}", false),
    ("Rfr", "\u{211C}", false),
    ("Rho", "\u{03A1}", false),
    ("RightAngleBracket", "\u{27E9}", false),
    ("RightArrow", "\u{2192}", false),
    ("RightArrowBar", "\u{21E5}", false),
    ("RightArrowLeftArrow", "\u{21C4}", false),
    ("RightCeiling", "\u{2309}", false),
    ("RightDoubleBracket", "\u{27E7}", false),
    ("RightDownTeeVector", "\u{295D}", false),
    ("RightDownVector", "\u{21C2}", false),
    ("RightDownVectorBar", "\u{2955}", false),
    ("RightFloor", "\u{230B}", false),
    ("RightTee", "\u{22A2}", false),
    ("RightTeeArrow", "\u{21A6}", false),
    ("RightTeeVector", "\u{295B}", false),
    ("RightTriangle", "\u{22B3}", false),
    ("RightTriangleBar", "\u{29D0}", false),
    ("RightTriangleEqual", "\u{22B5}", false),
    ("RightUpDownVector", "\u{294F}", false),
    ("RightUpTeeVector", "\u{295C}", false),
    ("RightUpVector", "\u{21BE}", false),
    ("RightUpVectorBar", "\u{2954}", false),
    ("RightVector", "\u{21C0}", false),
    ("RightVectorBar", "\u{2953}", false),
    ("Rightarrow", "\u{21D2}", false),
    ("Ropf", "\u{211D}", false),
    ("RoundImplies", "\u{2970}", false),
    ("Rrightarrow", "\u{21DB}", false),
    ("Rscr", "\u{211B}", false),
    ("Rsh", "\u{21B1}", false),
    ("RuleDelayed", "\u{29F4}", false),
    ("SHCHcy", "\u{0429}", false),
    ("SHcy", "\u{0428}", false),
    ("SOFTcy", "\u{042C}", false),
    ("Sacute", "\u{015A}", false),
    ("Sc", "\u{2ABC}", false),
    ("Scaron", "\u{0160}", false),
    ("Scedil", "\u{015E}", false),
    ("Scirc", "\u{015C}", false),
    ("Scy", "\u{0421}", false),
    ("Sfr", "\u{1D516}", false),
    ("ShortDownArrow", "\u{2193}", false),
    ("ShortLeftArrow", "\u{2190}", false),
    ("ShortRightArrow", "\u{2192}", false),
    ("ShortUpArrow", "\u{2191}", false),
    ("Sigma", "\u{03A3}", false),
    ("SmallCircle", "\u{2218}", false),
    ("Sopf", "\u{1D54A}", false),
    ("Sqrt", "\u{221A}", false),
    ("Square", "\u{25A1}", false),
    ("SquareIntersection", "\u{2293}", false),
    ("SquareSubset", "\u{228F}", false),
    ("SquareSubsetEqual", "\u{2291}", false),
    ("SquareSuperset", "\u{2290}", false),
    ("SquareSupersetEqual", "\u{2292}", false),
    ("SquareUnion", "\u{2294}", false),
    ("Sscr", "\u{1D4AE}", false),
    ("Star", "\u{22C6}", false),
    ("Sub", "\u{22D0}", false),
    ("Subset", "\u{22D0}", false),
    ("SubsetEqual", "\u{2286}", false),
    ("Succeeds", "\u{227B}", false),
    ("SucceedsEqual", "\u{2AB0}", false),
    ("SucceedsSlantEqual", "\u{227D}", false),
    ("SucceedsTilde", "\u{227F}", false),
    ("SuchThat", "\u{220B}", false),
    ("Sum", "\u{2211}", false),
    ("Sup", "\u{22D1}", false),
    ("Superset", "\u{2283}", false),
    ("SupersetEqual", "\u{2287}", false),
    ("Supset", "\u{22D1}", false),
    ("THORN", "\u{00DE}", true),
    ("TRADE", "\u{2122}", false),
    ("TSHcy", "\u{040B}", false),
    ("TScy", "\u{0426}", false),
    ("Tab", "\t", false),
    ("Tau", "\u{03A4}", false),
    ("Tcaron", "\u{0164}", false),
    ("Tcedil", "\u{0162}", false),
    ("Tcy", "\u{0422}", false),
    ("Tfr", "\u{1D517}", false),
    ("Therefore", "\u{2234}", false),
    ("Theta", "\u{0398}", false),
    ("ThickSpace", "\u{205F}\u{200A}", false),
    ("ThinSpace", "\u{2009}", false),
    ("Tilde", "\u{223C}", false),
    ("TildeEqual", "\u{2243}", false),
    ("TildeFullEqual", "\u{2245}", false),
    ("TildeTilde", "\u{2248}", false),
    ("Topf", "\u{1D54B}", false),
    ("TripleDot", "\u{20DB}", false),
    ("Tscr", "\u{1D4AF}", false),
    ("Tstrok", "\u{0166}", false),
    ("Uacute", "\u{00DA}", true),
    ("Uarr", "\u{219F}", false),
    ("Uarrocir", "\u{2949}", false),
    ("Ubrcy", "\u{040E}", false),
    ("Ubreve", "\u{016C}", false),
    ("Ucirc", "\u{00DB}", true),
    ("Ucy", "\u{0423}", false),
    ("Udblac", "\u{0170}", false),
    ("Ufr", "\u{1D518}", false),
    ("Ugrave", "\u{00D9}", true),
    ("Umacr", "\u{016A}", false),
    ("UnderBar", "_", false),
    ("UnderBrace", "\u{23DF}", false),
    ("UnderBracket", "\u{23B5}", false),
    ("UnderParenthesis", "\u{23DD}", false),
    ("Union", "\u{22C3}", false),
    ("UnionPlus", "\u{228E}", false),
    ("Uogon", "\u{0172}", false),
    ("Uopf", "\u{1D54C}", false),
    ("UpArrow", "\u{2191}", false),
    ("UpArrowBar", "\u{2912}", false),
    ("UpArrowDownArrow", "\u{21C5}", false),
    ("UpDownArrow", "\u{2195}", false),
    ("UpEquilibrium", "\u{296E}", false),
    ("UpTee", "\u{22A5}", false),
    ("UpTeeArrow", "\u{21A5}", false),
    ("Uparrow", "\u{21D1}", false),
    ("Updownarrow", "\u{21D5}", false),
    ("UpperLeftArrow", "\u{2196}", false),
    ("UpperRightArrow", "\u{2197}", false),
    ("Upsi", "\u{03D2}", false),
    ("Upsilon", "\u{03A5}", false),
    ("Uring", "\u{016E}", false),
    ("Uscr", "\u{1D4B0}", false),
    ("Utilde", "\u{0168}", false),
    ("Uuml", "\u{00DC}", true),
    ("VDash", "\u{22AB}", false),
    ("Vbar", "\u{2AEB}", false),
    ("Vcy", "\u{0412}", false),
    ("Vdash", "\u{22A9}", false),
    ("Vdashl", "\u{2AE6}", false),
    ("Vee", "\u{22C1}", false),
    ("Verbar", "\u{2016}", false),
    ("Vert", "\u{2016}", false),
    ("VerticalBar", "\u{2223}", false),
    ("VerticalLine", "|", false),
    ("VerticalSeparator", "\u{2758}", false),
    ("VerticalTilde", "\u{2240}", false),
    ("VeryThinSpace", "\u{200A}", false),
    ("Vfr", "\u{1D519}", false),
    ("Vopf", "\u{1D54D}", false),
    ("Vscr", "\u{1D4B1}", false),
    ("Vvdash", "\u{22AA}", false),
    ("Wcirc", "\u{0174}", false),
    ("Wedge", "\u{22C0}", false),
    ("Wfr", "\u{1D51A}", false),
    ("Wopf", "\u{1D54E}", false),
    ("Wscr", "\u{1D4B2}", false),
    ("Xfr", "\u{1D51B}", false),
    ("Xi", "\u{039E}", false),
    ("Xopf", "\u{1D54F}", false),
    ("Xscr", "\u{1D4B3}", false),
    ("YAcy", "\u{042F}", false),
    ("YIcy", "\u{0407}", false),
    ("YUcy", "\u{042E}", false),
    ("Yacute", "\u{00DD}", true),
    ("Ycirc", "\u{0176}", false),
    ("Ycy", "\u{042B}", false),
    ("Yfr", "\u{1D51C}", false),
    ("Yopf", "\u{1D550}", false),
    ("Yscr", "\u{1D4B4}", false),
    ("Yuml", "\u{0178}", false),
    ("ZHcy", "\u{0416}", false),
    ("Zacute", "\u{0179}", false),
    ("Zcaron", "\u{017D}", false),
    ("Zcy", "\u{0417}", false),
    ("Zdot", "\u{017B}", false),
    ("ZeroWidthSpace", "\u{200B}", false),
    ("Zeta", "\u{0396}", false),
    ("Zfr", "\u{2128}", false),
    ("Zopf", "\u{2124}", false),
    ("Zscr", "\u{1D4B5}", false),
    ("aacute", "\u{00E1}", true),
    ("abreve", "\u{0103}", false),
    ("ac", "\u{223E}", false),
    ("acE", "\u{223E}\u{0333}", false),
    ("acd", "\u{223F}", false),
    ("acirc", "\u{00E2}", true),
    ("acute", "\u{00B4}", true),
    ("acy", "\u{0430}", false),
    ("aelig", "\u{00E6}", true),
    ("af", "\u{2061}", false),
    ("afr", "\u{1D51E}", false),
    ("agrave", "\u{00E0}", true),
    ("alefsym", "\u{2135}", false),
    ("aleph", "\u{2135}", false),
    ("alpha", "\u{03B1}", false),
    ("amacr", "\u{0101}", false),
    ("amalg", "\u{2A3F}", false),
    ("amp", "&", true),
    ("and", "\u{2227}", false),
    ("andand", "\u{2A55}", false),
    ("andd", "\u{2A5C}", false),
    ("andslope", "\u{2A58}", false),
    ("andv", "\u{2A5A}", false),
    ("ang", "\u{2220}", false),
    ("ange", "\u{29A4}", false),
    ("angle", "\u{2220}", false),
    ("angmsd", "\u{2221}", false),
    ("angmsdaa", "\u{29A8}", false),
    ("angmsdab", "\u{29A9}", false),
    ("angmsdac", "\u{29AA}", false),
    ("angmsdad", "\u{29AB}", false),
    ("angmsdae", "\u{29AC}", false),
    ("angmsdaf", "\u{29AD}", false),
    ("angmsdag", "\u{29AE}", false),
    ("angmsdah", "\u{29AF}", false),
    ("angrt", "\u{221F}", false),
    ("angrtvb", "\u{22BE}", false),
    ("angrtvbd", "\u{299D}", false),
    ("angsph", "\u{2222}", false),
    ("angst", "\u{00C5}", false),
    ("angzarr", "\u{237C}", false),
    ("aogon", "\u{0105}", false),
    ("aopf", "\u{1D552}", false),
    ("ap", "\u{2248}", false),
    ("apE", "\u{2A70}", false),
    ("apacir", "\u{2A6F}", false),
    ("ape", "\u{224A}", false),
    ("apid", "\u{224B}", false),
    ("apos", "'", false),
    ("approx", "\u{2248}", false),
    ("approxeq", "\u{224A}", false),
    ("aring", "\u{00E5}", true),
    ("ascr", "\u{1D4B6}", false),
    ("ast", "*", false),
    ("asymp", "\u{2248}", false),
    ("asympeq", "\u{224D}", false),
    ("atilde", "\u{00E3}", true),
    ("auml", "\u{00E4}", true),
    ("awconint", "\u{2233}", false),
    ("awint", "\u{2A11}", false),
    ("bNot", "\u{2AED}", false),
    ("backcong", "\u{224C}", false),
    ("backepsilon", "\u{03F6}", false),
    ("backprime", "\u{2035}", false),
    ("backsim", "\u{223D}", false),
    ("backsimeq", "\u{22CD}", false),
    ("barvee", "\u{22BD}", false),
    ("barwed", "\u{2305}", false),
    ("barwedge", "\u{2305}", false),
    ("bbrk", "\u{23B5}", false),
    ("bbrktbrk", "\u{23B6}", false),
    ("bcong", "\u{224C}", false),
    ("bcy", "\u{0431}", false),
    ("bdquo", "\u{201E}", false),
    ("becaus", "\u{2235}", false),
    ("because", "\u{2235}", false),
    ("bemptyv", "\u{29B0}", false),
    ("bepsi", "\u{03F6}", false),
    ("bernou", "\u{212C}", false),
    ("beta", "\u{03B2}", false),
    ("beth", "\u{2136}", false),
    ("between", "\u{226C}", false),
    ("bfr", "\u{1D51F}", false),
    ("bigcap", "\u{22C2}", false),
    ("bigcirc", "\u{25EF}", false),
    ("bigcup", "\u{22C3}", false),
    ("bigodot", "\u{2A00}", false),
    ("bigoplus", "\u{2A01}", false),
    ("bigotimes", "\u{2A02}", false),
    ("bigsqcup", "\u{2A06}", false),
    ("bigstar", "\u{2605}", false),
    ("bigtriangledown", "\u{25BD}", false),
    ("bigtriangleup", "\u{25B3}", false),
    ("biguplus", "\u{2A04}", false),
    ("bigvee", "\u{22C1}", false),
    ("bigwedge", "\u{22C0}", false),
    ("bkarow", "\u{290D}", false),
    ("blacklozenge", "\u{29EB}", false),
    ("blacksquare", "\u{25AA}", false),
    ("blacktriangle", "\u{25B4}", false),
    ("blacktriangledown", "\u{25BE}", false),
    ("blacktriangleleft", "\u{25C2}", false),
    ("blacktriangleright", "\u{25B8}", false),
    ("blank", "\u{2423}", false),
    ("blk12", "\u{2592}", false),
    ("blk14", "\u{2591}", false),
    ("blk34", "\u{2593}", false),
    ("block", "\u{2588}", false),
    ("bne", "=\u{20E5}", false),
    ("bnequiv", "\u{2261}\u{20E5}", false),
    ("bnot", "\u{2310}", false),
    ("bopf", "\u{1D553}", false),
    ("bot", "\u{22A5}", false),
    ("bottom", "\u{22A5}", false),
    ("bowtie", "\u{22C8}", false),
    ("boxDL", "\u{2557}", false),
    ("boxDR", "\u{2554}", false),
    ("boxDl", "\u{2556}", false),
    ("boxDr", "\u{2553}", false),
    ("boxH", "\u{2550}", false),
    ("boxHD", "\u{2566}", false),
    ("boxHU", "\u{2569}", false),
    ("boxHd", "\u{2564}", false),
    ("boxHu", "\u{2567}", false),
    ("boxUL", "\u{255D}", false),
    ("boxUR", "\u{255A}", false),
    ("boxUl", "\u{255C}", false),
    ("boxUr", "\u{2559}", false),
    ("boxV", "\u{2551}", false),
    ("boxVH", "\u{256C}", false),
    ("boxVL", "\u{2563}", false),
    ("boxVR", "\u{2560}", false),
    ("boxVh", "\u{256B}", false),
    ("boxVl", "\u{2562}", false),
    ("boxVr", "\u{255F}", false),
    ("boxbox", "\u{29C9}", false),
    ("boxdL", "\u{2555}", false),
    ("boxdR", "\u{2552}", false),
    ("boxdl", "\u{2510}", false),
    ("boxdr", "\u{250C}", false),
    ("boxh", "\u{2500}", false),
    ("boxhD", "\u{2565}", false),
    ("boxhU", "\u{2568}", false),
    ("boxhd", "\u{252C}", false),
    ("boxhu", "\u{2534}", false),
    ("boxminus", "\u{229F}", false),
    ("boxplus", "\u{229E}", false),
    ("boxtimes", "\u{22A0}", false),
    ("boxuL", "\u{255B}", false),
    ("boxuR", "\u{2558}", false),
    ("boxul", "\u{2518}", false),
    ("boxur", "\u{2514}", false),
    ("boxv", "\u{2502}", false),
    ("boxvH", "\u{256A}", false),
    ("boxvL", "\u{2561}", false),
    ("boxvR", "\u{255E}", false),
    ("boxvh", "\u{253C}", false),
    ("boxvl", "\u{2524}", false),
    ("boxvr", "\u{251C}", false),
    ("bprime", "\u{2035}", false),
    ("breve", "\u{02D8}", false),
    ("brvbar", "\u{00A6}", true),
    ("bscr", "\u{1D4B7}", false),
    ("bsemi", "\u{204F}", false),
    ("bsim", "\u{223D}", false),
    ("bsime", "\u{22CD}", false),
    ("bsol", "\\", false),
    ("bsolb", "\u{29C5}", false),
    ("bsolhsub", "\u{27C8}", false),
    ("bull", "\u{2022}", false),
    ("bullet", "\u{2022}", false),
    ("bump", "\u{224E}", false),
    ("bumpE", "\u{2AAE}", false),
    ("bumpe", "\u{224F}", false),
    ("bumpeq", "\u{224F}", false),
    ("cacute", "\u{0107}", false),
    ("cap", "\u{2229}", false),
    ("capand", "\u{2A44}", false),
    ("capbrcup", "\u{2A49}", false),
    ("capcap", "\u{2A4B}", false),
    ("capcup", "\u{2A47}", false),
    ("capdot", "\u{2A40}", false),
    ("caps", "\u{2229}\u{FE00}", false),
    ("caret", "\u{2041}", false),
    ("caron", "\u{02C7}", false),
    ("ccaps", "\u{2A4D}", false),
    ("ccaron", "\u{010D}", false),
    ("ccedil", "\u{00E7}", true),
    ("ccirc", "\u{0109}", false),
    ("ccups", "\u{2A4C}", false),
    ("ccupssm", "\u{2A50}", false),
    ("cdot", "\u{010B}", false),
    ("cedil", "\u{00B8}", true),
    ("cemptyv", "\u{29B2}", false),
    ("cent", "\u{00A2}", true),
    ("centerdot", "\u{00B7}", false),
    ("cfr", "\u{1D520}", false),
    ("chcy", "\u{0447}", false),
    ("check", "\u{2713}", false),
    ("checkmark", "\u{2713}", false),
    ("chi", "\u{03C7}", false),
    ("cir", "\u{25CB}", false),
    ("cirE", "\u{29C3}", false),
    ("circ", "\u{02C6}", false),
    ("circeq", "\u{2257}", false),
    ("circlearrowleft", "\u{21BA}", false),
    ("circlearrowright", "\u{21BB}", false),
    ("circledR", "\u{00AE}", false),
    ("circledS", "\u{24C8}", false),
    ("circledast", "\u{229B}", false),
    ("circledcirc", "\u{229A}", false),
    ("circleddash", "\u{229D}", false),
    ("cire", "\u{2257}", false),
    ("cirfnint", "\u{2A10}", false),
    ("cirmid", "\u{2AEF}", false),
    ("cirscir", "\u{29C2}", false),
    ("clubs", "\u{2663}", false),
    ("clubsuit", "\u{2663}", false),
    ("colon", ":", false),
    ("colone", "\u{2254}", false),
    ("coloneq", "\u{2254}", false),
    ("comma", ",", false),
    ("commat", "@", false),
    ("comp", "\u{2201}", false),
    ("compfn", "\u{2218}", false),
    ("complement", "\u{2201}", false),
    ("complexes", "\u{2102}", false),
    ("cong", "\u{2245}", false),
    ("congdot", "\u{2A6D}", false),
    ("conint", "\u{222E}", false),
    ("copf", "\u{1D554}", false),
    ("coprod", "\u{2210}", false),
    ("copy", "\u{00A9}", true),
    ("copysr", "\u{2117}", false),
    ("crarr", "\u{21B5}", false),
    ("cross", "\u{2717}", false),
    ("cscr", "\u{1D4B8}", false),
    ("csub", "\u{2ACF}", false),
    ("csube", "\u{2AD1}", false),
    ("csup", "\u{2AD0}", false),
    ("csupe", "\u{2AD2}", false),
    ("ctdot", "\u{22EF}", false),
    ("cudarrl", "\u{2938}", false),
    ("cudarrr", "\u{2935}", false),
    ("cuepr", "\u{22DE}", false),
    ("cuesc", "\u{22DF}", false),
    ("cularr", "\u{21B6}", false),
    ("cularrp", "\u{293D}", false),
    ("cup", "\u{222A}", false),
    ("cupbrcap", "\u{2A48}", false),
    ("cupcap", "\u{2A46}", false),
    ("cupcup", "\u{2A4A}", false),
    ("cupdot", "\u{228D}", false),
    ("cupor", "\u{2A45}", false),
    ("cups", "\u{222A}\u{FE00}", false),
    ("curarr", "\u{21B7}", false),
    ("curarrm", "\u{293C}", false),
    ("curlyeqprec", "\u{22DE}", false),
    ("curlyeqsucc", "\u{22DF}", false),
    ("curlyvee", "\u{22CE}", false),
    ("curlywedge", "\u{22CF}", false),
    ("curren", "\u{00A4}", true),
    ("curvearrowleft", "\u{21B6}", false),
    ("curvearrowright", "\u{21B7}", false),
    ("cuvee", "\u{22CE}", false),
    ("cuwed", "\u{22CF}", false),
    ("cwconint", "\u{2232}", false),
    ("cwint", "\u{2231}", false),
    ("cylcty", "\u{232D}", false),
    ("dArr", "\u{21D3}", false),
    ("dHar", "\u{2965}", false),
    ("dagger", "\u{2020}", false),
    ("daleth", "\u{2138}", false),
    ("darr", "\u{2193}", false),
    ("dash", "\u{2010}", false),
    ("dashv", "\u{22A3}", false),
    ("dbkarow", "\u{290F}", false),
    ("dblac", "\u{02DD}", false),
    ("dcaron", "\u{010F}", false),
    ("dcy", "\u{0434}", false),
    ("dd", "\u{2146}", false),
    ("ddagger", "\u{2021}", false),
    ("ddarr", "\u{21CA}", false),
    ("ddotseq", "\u{2A77}", false),
    ("deg", "\u{00B0}", true),
    ("delta", "\u{03B4}", false),
    ("demptyv", "\u{29B1}", false),
    ("dfisht", "\u{297F}", false),
    ("dfr", "\u{1D521}", false),
    ("dharl", "\u{21C3}", false),
    ("dharr", "\u{21C2}", false),
    ("diam", "\u{22C4}", false),
    ("diamond", "\u{22C4}", false),
    ("diamondsuit", "\u{2666}", false),
    ("diams", "\u{2666}", false),
    ("die", "\u{00A8}", false),
    ("digamma", "\u{03DD}", false),
    ("disin", "\u{22F2}", false),
    ("div", "\u{00F7}", false),
    ("divide", "\u{00F7}", true),
    ("divideontimes", "\u{22C7}", false),
    ("divonx", "\u{22C7}", false),
    ("djcy", "\u{0452}", false),
    ("dlcorn", "\u{231E}", false),
    ("dlcrop", "\u{230D}", false),
    ("dollar", "$", false),
    ("dopf", "\u{1D555}", false),
    ("dot", "\u{02D9}", false),
    ("doteq", "\u{2250}", false),
    ("doteqdot", "\u{2251}", false),
    ("dotminus", "\u{2238}", false),
    ("dotplus", "\u{2214}", false),
    ("dotsquare", "\u{22A1}", false),
    ("doublebarwedge", "\u{2306}", false),
    ("downarrow", "\u{2193}", false),
    ("downdownarrows", "\u{21CA}", false),
    ("downharpoonleft", "\u{21C3}", false),
    ("downharpoonright", "\u{21C2}", false),
    ("drbkarow", "\u{2910}", false),
    ("drcorn", "\u{231F}", false),
    ("drcrop", "\u{230C}", false),
    ("dscr", "\u{1D4B9}", false),
    ("dscy", "\u{0455}", false),
    ("dsol", "\u{29F6}", false),
    ("dstrok", "\u{0111}", false),
    ("dtdot", "\u{22F1}", false),
    ("dtri", "\u{25BF}", false),
    ("dtrif", "\u{25BE}", false),
    ("duarr", "\u{21F5}", false),
    ("duhar", "\u{296F}", false),
    ("dwangle", "\u{29A6}", false),
    ("dzcy", "\u{045F}", false),
    ("dzigrarr", "\u{27FF}", false),
    ("eDDot", "\u{2A77}", false),
    ("eDot", "\u{2251}", false),
    ("eacute", "\u{00E9}", true),
    ("easter", "\u{2A6E}", false),
    ("ecaron", "\u{011B}", false),
    ("ecir", "\u{2256}", false),
    ("ecirc", "\u{00EA}", true),
    ("ecolon", "\u{2255}", false),
    ("ecy", "\u{044D}", false),
    ("edot", "\u{0117}", false),
    ("ee", "\u{2147}", false),
    ("efDot", "\u{2252}", false),
    ("efr", "\u{1D522}", false),
    ("eg", "\u{2A9A}", false),
    ("egrave", "\u{00E8}", true),
    ("egs", "\u{2A96}", false),
    ("egsdot", "\u{2A98}", false),
    ("el", "\u{2A99}", false),
    ("elinters", "\u{23E7}", false),
    ("ell", "\u{2113}", false),
    ("els", "\u{2A95}", false),
    ("elsdot", "\u{2A97}", false),
    ("emacr", "\u{0113}", false),
    ("empty", "\u{2205}", false),
    ("emptyset", "\u{2205}", false),
    ("emptyv", "\u{2205}", false),
    ("emsp", "\u{2003}", false),
    ("emsp13", "\u{2004}", false),
    ("emsp14", "\u{2005}", false),
    ("eng", "\u{014B}", false),
    ("ensp", "\u{2002}", false),
    ("eogon", "\u{0119}", false),
    ("eopf", "\u{1D556}", false),
    ("epar", "\u{22D5}", false),
    ("eparsl", "\u{29E3}", false),
    ("eplus", "\u{2A71}", false),
    ("epsi", "\u{03B5}", false),
    ("epsilon", "\u{03B5}", false),
    ("epsiv", "\u{03F5}", false),
    ("eqcirc", "\u{2256}", false),
    ("eqcolon", "\u{2255}", false),
    ("eqsim", "\u{2242}", false),
    ("eqslantgtr", "\u{2A96}", false),
    ("eqslantless", "\u{2A95}", false),
    ("equals", "=", false),
    ("equest", "\u{225F}", false),
    ("equiv", "\u{2261}", false),
    ("equivDD", "\u{2A78}", false),
    ("eqvparsl", "\u{29E5}", false),
    ("erDot", "\u{2253}", false),
    ("erarr", "\u{2971}", false),
    ("escr", "\u{212F}", false),
    ("esdot", "\u{2250}", false),
    ("esim", "\u{2242}", false),
    ("eta", "\u{03B7}", false),
    ("eth", "\u{00F0}", true),
    ("euml", "\u{00EB}", true),
    ("euro", "\u{20AC}", false),
    ("excl", "!", false),
    ("exist", "\u{2203}", false),
    ("expectation", "\u{2130}", false),
    ("exponentiale", "\u{2147}", false),
    ("fallingdotseq", "\u{2252}", false),
    ("fcy", "\u{0444}", false),
    ("female", "\u{2640}", false),
    ("ffilig", "\u{FB03}", false),
    ("fflig", "\u{FB00}", false),
    ("ffllig", "\u{FB04}", false),
    ("ffr", "\u{1D523}", false),
    ("filig", "\u{FB01}", false),
    ("fjlig", "fj", false),
    ("flat", "\u{266D}", false),
    ("fllig", "\u{FB02}", false),
    ("fltns", "\u{25B1}", false),
    ("fnof", "\u{0192}", false),
    ("fopf", "\u{1D557}", false),
    ("forall", "\u{2200}", false),
    ("fork", "\u{22D4}", false),
    ("forkv", "\u{2AD9}", false),
    ("fpartint", "\u{2A0D}", false),
    ("frac12", "\u{00BD}", true),
    ("frac13", "\u{2153}", false),
    ("frac14", "\u{00BC}", true),
    ("frac15", "\u{2155}", false),
    ("frac16", "\u{2159}", false),
    ("frac18", "\u{215B}", false),
    ("frac23", "\u{2154}", false),
    ("frac25", "\u{2156}", false),
    ("frac34", "\u{00BE}", true),
    ("frac35", "\u{2157}", false),
    ("frac38", "\u{215C}", false),
    ("frac45", "\u{2158}", false),
    ("frac56", "\u{215A}", false),
    ("frac58", "\u{215D}", false),
    ("frac78", "\u{215E}", false),
    ("frasl", "\u{2044}", false),
    ("frown", "\u{2322}", false),
    ("fscr", "\u{1D4BB}", false),
    ("gE", "\u{2267}", false),
    ("gEl", "\u{2A8C}", false),
    ("gacute", "\u{01F5}", false),
    ("gamma", "\u{03B3}", false),
    ("gammad", "\u{03DD}", false),
    ("gap", "\u{2A86}", false),
    ("gbreve", "\u{011F}", false),
    ("gcirc", "\u{011D}", false),
    ("gcy", "\u{0433}", false),
    ("gdot", "\u{0121}", false),
    ("ge", "\u{2265}", false),
    ("gel", "\u{22DB}", false),
    ("geq", "\u{2265}", false),
    ("geqq", "\u{2267}", false),
    ("geqslant", "\u{2A7E}", false),
    ("ges", "\u{2A7E}", false),
    ("gescc", "\u{2AA9}", false),
    ("gesdot", "\u{2A80}", false),
    ("gesdoto", "\u{2A82}", false),
    ("gesdotol", "\u{2A84}", false),
    ("gesl", "\u{22DB}\u{FE00}", false),
    ("gesles", "\u{2A94}", false),
    ("gfr", "\u{1D524}", false),
    ("gg", "\u{226B}", false),
    ("ggg", "\u{22D9}", false),
    ("gimel", "\u{2137}", false),
    ("gjcy", "\u{0453}", false),
    ("gl", "\u{2277}", false),
    ("glE", "\u{2A92}", false),
    ("gla", "\u{2AA5}", false),
    ("glj", "\u{2AA4}", false),
    ("gnE", "\u{2269}", false),
    ("gnap", "\u{2A8A}", false),
    ("gnapprox", "\u{2A8A}", false),
    ("gne", "\u{2A88}", false),
    ("gneq", "\u{2A88}", false),
    ("gneqq", "\u{2269}", false),
    ("gnsim", "\u{22E7}", false),
    ("gopf", "\u{1D558}", false),
    ("grave", "`", false),
    ("gscr", "\u{210A}", false),
    ("gsim", "\u{2273}", false),
    ("gsime", "\u{2A8E}", false),
    ("gsiml", "\u{2A90}", false),
    ("gt", ">", true),
    ("gtcc", "\u{2AA7}", false),
    ("gtcir", "\u{2A7A}", false),
    ("gtdot", "\u{22D7}", false),
    ("gtlPar", "\u{2995}", false),
    ("gtquest", "\u{2A7C}", false),
    ("gtrapprox", "\u{2A86}", false),
    ("gtrarr", "\u{2978}", false),
    ("gtrdot", "\u{22D7}", false),
    ("gtreqless", "\u{22DB}", false),
    ("gtreqqless", "\u{2A8C}", false),
    ("gtrless", "\u{2277}", false),
    ("gtrsim", "\u{2273}", false),
    ("gvertneqq", "\u{2269}\u{FE00}", false),
    ("gvnE", "\u{2269}\u{FE00}", false),
    ("hArr", "\u{21D4}", false),
    ("hairsp", "\u{200A}", false),
    ("half", "\u{00BD}", false),
    ("hamilt", "\u{210B}", false),
    ("hardcy", "\u{044A}", false),
    ("harr", "\u{2194}", false),
    ("harrcir", "\u{2948}", false),
    ("harrw", "\u{21AD}", false),
    ("hbar", "\u{210F}", false),
    ("hcirc", "\u{0125}", false),
    ("hearts", "\u{2665}", false),
    ("heartsuit", "\u{2665}", false),
    ("hellip", "\u{2026}", false),
    ("hercon", "\u{22B9}", false),
    ("hfr", "\u{1D525}", false),
    ("hksearow", "\u{2925}", false),
    ("hkswarow", "\u{2926}", false),
    ("hoarr", "\u{21FF}", false),
    ("homtht", "\u{223B}", false),
    ("hookleftarrow", "\u{21A9}", false),
    ("hookrightarrow", "\u{21AA}", false),
    ("hopf", "\u{1D559}", false),
    ("horbar", "\u{2015}", false),
    ("hscr", "\u{1D4BD}", false),
    ("hslash", "\u{210F}", false),
    ("hstrok", "\u{0127}", false),
    ("hybull", "\u{2043}", false),
    ("hyphen", "\u{2010}", false),
    ("iacute", "\u{00ED}", true),
    ("ic", "\u{2063}", false),
    ("icirc", "\u{00EE}", true),
    ("icy", "\u{0438}", false),
    ("iecy", "\u{0435}", false),
    ("iexcl", "\u{00A1}", true),
    ("iff", "\u{21D4}", false),
    ("ifr", "\u{1D526}", false),
    ("igrave", "\u{00EC}", true),
    ("ii", "\u{2148}", false),
    ("iiiint", "\u{2A0C}", false),
    ("iiint", "\u{222D}", false),
    ("iinfin", "\u{29DC}", false),
    ("iiota", "\u{2129}", false),
    ("ijlig", "\u{0133}", false),
    ("imacr", "\u{012B}", false),
    ("image", "\u{2111}", false),
    ("imagline", "\u{2110}", false),
    ("imagpart", "\u{2111}", false),
    ("imath", "\u{0131}", false),
    ("imof", "\u{22B7}", false),
    ("imped", "\u{01B5}", false),
    ("in", "\u{2208}", false),
    ("incare", "\u{2105}", false),
    ("infin", "\u{221E}", false),
    ("infintie", "\u{29DD}", false),
    ("inodot", "\u{0131}", false),
    ("int", "\u{222B}", false),
    ("intcal", "\u{22BA}", false),
    ("integers", "\u{2124}", false),
    ("intercal", "\u{22BA}", false),
    ("intlarhk", "\u{2A17}", false),
    ("intprod", "\u{2A3C}", false),
    ("iocy", "\u{0451}", false),
    ("iogon", "\u{012F}", false),
    ("iopf", "\u{1D55A}", false),
    ("iota", "\u{03B9}", false),
    ("iprod", "\u{2A3C}", false),
    ("iquest", "\u{00BF}", true),
    ("iscr", "\u{1D4BE}", false),
    ("isin", "\u{2208}", false),
    ("isinE", "\u{22F9}", false),
    ("isindot", "\u{22F5}", false),
    ("isins", "\u{22F4}", false),
    ("isinsv", "\u{22F3}", false),
    ("isinv", "\u{2208}", false),
    ("it", "\u{2062}", false),
    ("itilde", "\u{0129}", false),
    ("iukcy", "\u{0456}", false),
    ("iuml", "\u{00EF}", true),
    ("jcirc", "\u{0135}", false),
    ("jcy", "\u{0439}", false),
    ("jfr", "\u{1D527}", false),
    ("jmath", "\u{0237}", false),
    ("jopf", "\u{1D55B}", false),
    ("jscr", "\u{1D4BF}", false),
    ("jsercy", "\u{0458}", false),
    ("jukcy", "\u{0454}", false),
    ("kappa", "\u{03BA}", false),
    ("kappav", "\u{03F0}", false),
    ("kcedil", "\u{0137}", false),
    ("kcy", "\u{043A}", false),
    ("kfr", "\u{1D528}", false),
    ("kgreen", "\u{0138}", false),
    ("khcy", "\u{0445}", false),
    ("kjcy", "\u{045C}", false),
    ("kopf", "\u{1D55C}", false),
    ("kscr", "\u{1D4C0}", false),
    ("lAarr", "\u{21DA}", false),
    ("lArr", "\u{21D0}", false),
    ("lAtail", "\u{291B}", false),
    ("lBarr", "\u{290E}", false),
    ("lE", "\u{2266}", false),
    ("lEg", "\u{2A8B}", false),
    ("lHar", "\u{2962}", false),
    ("lacute", "\u{013A}", false),
    ("laemptyv", "\u{29B4}", false),
    ("lagran", "\u{2112}", false),
    ("lambda", "\u{03BB}", false),
    ("lang", "\u{27E8}", false),
    ("langd", "\u{2991}", false),
    ("langle", "\u{27E8}", false),
    ("lap", "\u{2A85}", false),
    ("laquo", "\u{00AB}", true),
    ("larr", "\u{2190}", false),
    ("larrb", "\u{21E4}", false),
    ("larrbfs", "\u{291F}", false),
    ("larrfs", "\u{291D}", false),
    ("larrhk", "\u{21A9}", false),
    ("larrlp", "\u{21AB}", false),
    ("larrpl", "\u{2939}", false),
    ("larrsim", "\u{2973}", false),
    ("larrtl", "\u{21A2}", false),
    ("lat", "\u{2AAB}", false),
    ("latail", "\u{2919}", false),
    ("late", "\u{2AAD}", false),
    ("lates", "\u{2AAD}\u{FE00}", false),
    ("lbarr", "\u{290C}", false),
    ("lbbrk", "\u{2772}", false),
    ("lbrace", "{", false),
    ("lbrack", "[", false),
    ("lbrke", "\u{298B}", false),
    ("lbrksld", "\u{298F}", false),
    ("lbrkslu", "\u{298D}", false),
    ("lcaron", "\u{013E}", false),
    ("lcedil", "\u{013C}", false),
    ("lceil", "\u{2308}", false),
    ("lcub", "{", false),
    ("lcy", "\u{043B}", false),
    ("ldca", "\u{2936}", false),
    ("ldquo", "\u{201C}", false),
    ("ldquor", "\u{201E}", false),
    ("ldrdhar", "\u{2967}", false),
    ("ldrushar", "\u{294B}", false),
    ("ldsh", "\u{21B2}", false),
    ("le", "\u{2264}", false),
    ("leftarrow", "\u{2190}", false),
    ("leftarrowtail", "\u{21A2}", false),
    ("leftharpoondown", "\u{21BD}", false),
    ("leftharpoonup", "\u{21BC}", false),
    ("leftleftarrows", "\u{21C7}", false),
    ("leftrightarrow", "\u{2194}", false),
    ("leftrightarrows", "\u{21C6}", false),
    ("leftrightharpoons", "\u{21CB}", false),
    ("leftrightsquigarrow", "\u{21AD}", false),
    ("leftthreetimes", "\u{22CB}", false),
    ("leg", "\u{22DA}", false),
    ("leq", "\u{2264}", false),
    ("leqq", "\u{2266}", false),
    ("leqslant", "\u{2A7D}", false),
    ("les", "\u{2A7D}", false),
    ("lescc", "\u{2AA8}", false),
    ("lesdot", "\u{2A7F}", false),
    ("lesdoto", "\u{2A81}", false),
    ("lesdotor", "\u{2A83}", false),
    ("lesg", "\u{22DA}\u{FE00}", false),
    ("lesges", "\u{2A93}", false),
    ("lessapprox", "\u{2A85}", false),
    ("lessdot", "\u{22D6}", false),
    ("lesseqgtr", "\u{22DA}", false),
    ("lesseqqgtr", "\u{2A8B}", false),
    ("lessgtr", "\u{2276}", false),
    ("lesssim", "\u{2272}", false),
    ("lfisht", "\u{297C}", false),
    ("lfloor", "\u{230A}", false),
    ("lfr", "\u{1D529}", false),
    ("lg", "\u{2276}", false),
    ("lgE", "\u{2A91}", false),
    ("lhard", "\u{21BD}", false),
    ("lharu", "\u{21BC}", false),
    ("lharul", "\u{296A}", false),
    ("lhblk", "\u{2584}", false),
    ("ljcy", "\u{0459}", false),
    ("ll", "\u{226A}", false),
    ("llarr", "\u{21C7}", false),
    ("llcorner", "\u{231E}", false),
    ("llhard", "\u{296B}", false),
    ("lltri", "\u{25FA}", false),
    ("lmidot", "\u{0140}", false),
    ("lmoust", "\u{23B0}", false),
    ("lmoustache", "\u{23B0}", false),
    ("lnE", "\u{2268}", false),
    ("lnap", "\u{2A89}", false),
    ("lnapprox", "\u{2A89}", false),
    ("lne", "\u{2A87}", false),
    ("lneq", "\u{2A87}", false),
    ("lneqq", "\u{2268}", false),
    ("lnsim", "\u{22E6}", false),
    ("loang", "\u{27EC}", false),
    ("loarr", "\u{21FD}", false),
    ("lobrk", "\u{27E6}", false),
    ("longleftarrow", "\u{27F5}", false),
    ("longleftrightarrow", "\u{27F7}", false),
    ("longmapsto", "\u{27FC}", false),
    ("longrightarrow", "\u{27F6}", false),
    ("looparrowleft", "\u{21AB}", false),
    ("looparrowright", "\u{21AC}", false),
    ("lopar", "\u{2985}", false),
    ("lopf", "\u{1D55D}", false),
    ("loplus", "\u{2A2D}", false),
    ("lotimes", "\u{2A34}", false),
    ("lowast", "\u{2217}", false),
    ("lowbar", "_", false),
    ("loz", "\u{25CA}", false),
    ("lozenge", "\u{25CA}", false),
    ("lozf", "\u{29EB}", false),
    ("lpar", "(", false),
    ("lparlt", "\u{2993}", false),
    ("lrarr", "\u{21C6}", false),
    ("lrcorner", "\u{231F}", false),
    ("lrhar", "\u{21CB}", false),
    ("lrhard", "\u{296D}", false),
    ("lrm", "\u{200E}", false),
    ("lrtri", "\u{22BF}", false),
    ("lsaquo", "\u{2039}", false),
    ("lscr", "\u{1D4C1}", false),
    ("lsh", "\u{21B0}", false),
    ("lsim", "\u{2272}", false),
    ("lsime", "\u{2A8D}", false),
    ("lsimg", "\u{2A8F}", false),
    ("lsqb", "[", false),
    ("lsquo", "\u{2018}", false),
    ("lsquor", "\u{201A}", false),
    ("lstrok", "\u{0142}", false),
    ("lt", "<", true),
    ("ltcc", "\u{2AA6}", false),
    ("ltcir", "\u{2A79}", false),
    ("ltdot", "\u{22D6}", false),
    ("lthree", "\u{22CB}", false),
    ("ltimes", "\u{22C9}", false),
    ("ltlarr", "\u{2976}", false),
    ("ltquest", "\u{2A7B}", false),
    ("ltrPar", "\u{2996}", false),
    ("ltri", "\u{25C3}", false),
    ("ltrie", "\u{22B4}", false),
    ("ltrif", "\u{25C2}", false),
    ("lurdshar", "\u{294A}", false),
    ("luruhar", "\u{2966}", false),
    ("lvertneqq", "\u{2268}\u{FE00}", false),
    ("lvnE", "\u{2268}\u{FE00}", false),
    ("mDDot", "\u{223A}", false),
    ("macr", "\u{00AF}", true),
    ("male", "\u{2642}", false),
    ("malt", "\u{2720}", false),
    ("maltese", "\u{2720}", false),
    ("map", "\u{21A6}", false),
    ("mapsto", "\u{21A6}", false),
    ("mapstodown", "\u{21A7}", false),
    ("mapstoleft", "\u{21A4}", false),
    ("mapstoup", "\u{21A5}", false),
    ("marker", "\u{25AE}", false),
    ("mcomma", "\u{2A29}", false),
    ("mcy", "\u{043C}", false),
    ("mdash", "\u{2014}", false),
    ("measuredangle", "\u{2221}", false),
    ("mfr", "\u{1D52A}", false),
    ("mho", "\u{2127}", false),
    ("micro", "\u{00B5}", true),
    ("mid", "\u{2223}", false),
    ("midast", "*", false),
    ("midcir", "\u{2AF0}", false),
    ("middot", "\u{00B7}", true),
    ("minus", "\u{2212}", false),
    ("minusb", "\u{229F}", false),
    ("minusd", "\u{2238}", false),
    ("minusdu", "\u{2A2A}", false),
    ("mlcp", "\u{2ADB}", false),
    ("mldr", "\u{2026}", false),
    ("mnplus", "\u{2213}", false),
    ("models", "\u{22A7}", false),
    ("mopf", "\u{1D55E}", false),
    ("mp", "\u{2213}", false),
    ("mscr", "\u{1D4C2}", false),
    ("mstpos", "\u{223E}", false),
    ("mu", "\u{03BC}", false),
    ("multimap", "\u{22B8}", false),
    ("mumap", "\u{22B8}", false),
    ("nGg", "\u{22D9}\u{0338}", false),
    ("nGt", "\u{226B}\u{20D2}", false),
    ("nGtv", "\u{226B}\u{0338}", false),
    ("nLeftarrow", "\u{21CD}", false),
    ("nLeftrightarrow", "\u{21CE}", false),
    ("nLl", "\u{22D8}\u{0338}", false),
    ("nLt", "\u{226A}\u{20D2}", false),
    ("nLtv", "\u{226A}\u{0338}", false),
    ("nRightarrow", "\u{21CF}", false),
    ("nVDash", "\u{22AF}", false),
    ("nVdash", "\u{22AE}", false),
    ("nabla", "\u{2207}", false),
    ("nacute", "\u{0144}", false),
    ("nang", "\u{2220}\u{20D2}", false),
    ("nap", "\u{2249}", false),
    ("napE", "\u{2A70}\u{0338}", false),
    ("napid", "\u{224B}\u{0338}", false),
    ("napos", "\u{0149}", false),
    ("napprox", "\u{2249}", false),
    ("natur", "\u{266E}", false),
    ("natural", "\u{266E}", false),
    ("naturals", "\u{2115}", false),
    ("nbsp", "\u{00A0}", true),
    ("nbump", "\u{224E}\u{0338}", false),
    ("nbumpe", "\u{224F}\u{0338}", false),
    ("ncap", "\u{2A43}", false),
    ("ncaron", "\u{0148}", false),
    ("ncedil", "\u{0146}", false),
    ("ncong", "\u{2247}", false),
    ("ncongdot", "\u{2A6D}\u{0338}", false),
    ("ncup", "\u{2A42}", false),
    ("ncy", "\u{043D}", false),
    ("ndash", "\u{2013}", false),
    ("ne", "\u{2260}", false),
    ("neArr", "\u{21D7}", false),
    ("nearhk", "\u{2924}", false),
    ("nearr", "\u{2197}", false),
    ("nearrow", "\u{2197}", false),
    ("nedot", "\u{2250}\u{0338}", false),
    ("nequiv", "\u{2262}", false),
    ("nesear", "\u{2928}", false),
    ("nesim", "\u{2242}\u{0338}", false),
    ("nexist", "\u{2204}", false),
    ("nexists", "\u{2204}", false),
    ("nfr", "\u{1D52B}", false),
    ("ngE", "\u{2267}\u{0338}", false),
    ("nge", "\u{2271}", false),
    ("ngeq", "\u{2271}", false),
    ("ngeqq", "\u{2267}\u{0338}", false),
    ("ngeqslant", "\u{2A7E}\u{0338}", false),
    ("nges", "\u{2A7E}\u{0338}", false),
    ("ngsim", "\u{2275}", false),
    ("ngt", "\u{226F}", false),
    ("ngtr", "\u{226F}", false),
    ("nhArr", "\u{21CE}", false),
    ("nharr", "\u{21AE}", false),
    ("nhpar", "\u{2AF2}", false),
    ("ni", "\u{220B}", false),
    ("nis", "\u{22FC}", false),
    ("nisd", "\u{22FA}", false),
    ("niv", "\u{220B}", false),
    ("njcy", "\u{045A}", false),
    ("nlArr", "\u{21CD}", false),
    ("nlE", "\u{2266}\u{0338}", false),
    ("nlarr", "\u{219A}", false),
    ("nldr", "\u{2025}", false),
    ("nle", "\u{2270}", false),
    ("nleftarrow", "\u{219A}", false),
    ("nleftrightarrow", "\u{21AE}", false),
    ("nleq", "\u{2270}", false),
    ("nleqq", "\u{2266}\u{0338}", false),
    ("nleqslant", "\u{2A7D}\u{0338}", false),
    ("nles", "\u{2A7D}\u{0338}", false),
    ("nless", "\u{226E}", false),
    ("nlsim", "\u{2274}", false),
    ("nlt", "\u{226E}", false),
    ("nltri", "\u{22EA}", false),
    ("nltrie", "\u{22EC}", false),
    ("nmid", "\u{2224}", false),
    ("nopf", "\u{1D55F}", false),
    ("not", "\u{00AC}", true),
    ("notin", "\u{2209}", false),
    ("notinE", "\u{22F9}\u{0338}", false),
    ("notindot", "\u{22F5}\u{0338}", false),
    ("notinva", "\u{2209}", false),
    ("notinvb", "\u{22F7}", false),
    ("notinvc", "\u{22F6}", false),
    ("notni", "\u{220C}", false),
    ("notniva", "\u{220C}", false),
    ("notnivb", "\u{22FE}", false),
    ("notnivc", "\u{22FD}", false),
    ("npar", "\u{2226}", false),
    ("nparallel", "\u{2226}", false),
    ("nparsl", "\u{2AFD}\u{20E5}", false),
    ("npart", "\u{2202}\u{0338}", false),
    ("npolint", "\u{2A14}", false),
    ("npr", "\u{2280}", false),
    ("nprcue", "\u{22E0}", false),
    ("npre", "\u{2AAF}\u{0338}", false),
    ("nprec", "\u{2280}", false),
    ("npreceq", "\u{2AAF}\u{0338}", false),
    ("nrArr", "\u{21CF}", false),
    ("nrarr", "\u{219B}", false),
    ("nrarrc", "\u{2933}\u{0338}", false),
    ("nrarrw", "\u{219D}\u{0338}", false),
    ("nrightarrow", "\u{219B}", false),
    ("nrtri", "\u{22EB}", false),
    ("nrtrie", "\u{22ED}", false),
    ("nsc", "\u{2281}", false),
    ("nsccue", "\u{22E1}", false),
    ("nsce", "\u{2AB0}\u{0338}", false),
    ("nscr", "\u{1D4C3}", false),
    ("nshortmid", "\u{2224}", false),
    ("nshortparallel", "\u{2226}", false),
    ("nsim", "\u{2241}", false),
    ("nsime", "\u{2244}", false),
    ("nsimeq", "\u{2244}", false),
    ("nsmid", "\u{2224}", false),
    ("nspar", "\u{2226}", false),
    ("nsqsube", "\u{22E2}", false),
    ("nsqsupe", "\u{22E3}", false),
    ("nsub", "\u{2284}", false),
    ("nsubE", "\u{2AC5}\u{0338}", false),
    ("nsube", "\u{2288}", false),
    ("nsubset", "\u{2282}\u{20D2}", false),
    ("nsubseteq", "\u{2288}", false),
    ("nsubseteqq", "\u{2AC5}\u{0338}", false),
    ("nsucc", "\u{2281}", false),
    ("nsucceq", "\u{2AB0}\u{0338}", false),
    ("nsup", "\u{2285}", false),
    ("nsupE", "\u{2AC6}\u{0338}", false),
    ("nsupe", "\u{2289}", false),
    ("nsupset", "\u{2283}\u{20D2}", false),
    ("nsupseteq", "\u{2289}", false),
    ("nsupseteqq", "\u{2AC6}\u{0338}", false),
    ("ntgl", "\u{2279}", false),
    ("ntilde", "\u{00F1}", true),
    ("ntlg", "\u{2278}", false),
    ("ntriangleleft", "\u{22EA}", false),
    ("ntrianglelefteq", "\u{22EC}", false),
    ("ntriangleright", "\u{22EB}", false),
    ("ntrianglerighteq", "\u{22ED}", false),
    ("nu", "\u{03BD}", false),
    ("num", "#", false),
    ("numero", "\u{2116}", false),
    ("numsp", "\u{2007}", false),
    ("nvDash", "\u{22AD}", false),
    ("nvHarr", "\u{2904}", false),
    ("nvap", "\u{224D}\u{20D2}", false),
    ("nvdash", "\u{22AC}", false),
    ("nvge", "\u{2265}\u{20D2}", false),
    ("nvgt", ">\u{20D2}", false),
    ("nvinfin", "\u{29DE}", false),
    ("nvlArr", "\u{2902}", false),
    ("nvle", "\u{2264}\u{20D2}", false),
    ("nvlt", "<\u{20D2}", false),
    ("nvltrie", "\u{22B4}\u{20D2}", false),
    ("nvrArr", "\u{2903}", false),
    ("nvrtrie", "\u{22B5}\u{20D2}", false),
    ("nvsim", "\u{223C}\u{20D2}", false),
    ("nwArr", "\u{21D6}", false),
    ("nwarhk", "\u{2923}", false),
    ("nwarr", "\u{2196}", false),
    ("nwarrow", "\u{2196}", false),
    ("nwnear", "\u{2927}", false),
    ("oS", "\u{24C8}", false),
    ("oacute", "\u{00F3}", true),
    ("oast", "\u{229B}", false),
    ("ocir", "\u{229A}", false),
    ("ocirc", "\u{00F4}", true),
    ("ocy", "\u{043E}", false),
    ("odash", "\u{229D}", false),
    ("odblac", "\u{0151}", false),
    ("odiv", "\u{2A38}", false),
    ("odot", "\u{2299}", false),
    ("odsold", "\u{29BC}", false),
    ("oelig", "\u{0153}", false),
    ("ofcir", "\u{29BF}", false),
    ("ofr", "\u{1D52C}", false),
    ("ogon", "\u{02DB}", false),
    ("ograve", "\u{00F2}", true),
    ("ogt", "\u{29C1}", false),
    ("ohbar", "\u{29B5}", false),
    ("ohm", "\u{03A9}", false),
    ("oint", "\u{222E}", false),
    ("olarr", "\u{21BA}", false),
    ("olcir", "\u{29BE}", false),
    ("olcross", "\u{29BB}", false),
    ("oline", "\u{203E}", false),
    ("olt", "\u{29C0}", false),
    ("omacr", "\u{014D}", false),
    ("omega", "\u{03C9}", false),
    ("omicron", "\u{03BF}", false),
    ("omid", "\u{29B6}", false),
    ("ominus", "\u{2296}", false),
    ("oopf", "\u{1D560}", false),
    ("opar", "\u{29B7}", false),
    ("operp", "\u{29B9}", false),
    ("oplus", "\u{2295}", false),
    ("or", "\u{2228}", false),
    ("orarr", "\u{21BB}", false),
    ("ord", "\u{2A5D}", false),
    ("order", "\u{2134}", false),
    ("orderof", "\u{2134}", false),
    ("ordf", "\u{00AA}", true),
    ("ordm", "\u{00BA}", true),
    ("origof", "\u{22B6}", false),
    ("oror", "\u{2A56}", false),
    ("orslope", "\u{2A57}", false),
    ("orv", "\u{2A5B}", false),
    ("oscr", "\u{2134}", false),
    ("oslash", "\u{00F8}", true),
    ("osol", "\u{2298}", false),
    ("otilde", "\u{00F5}", true),
    ("otimes", "\u{2297}", false),
    ("otimesas", "\u{2A36}", false),
    ("ouml", "\u{00F6}", true),
    ("ovbar", "\u{233D}", false),
    ("par", "\u{2225}", false),
    ("para", "\u{00B6}", true),
    ("parallel", "\u{2225}", false),
    ("parsim", "\u{2AF3}", false),
    ("parsl", "\u{2AFD}", false),
    ("part", "\u{2202}", false),
    ("pcy", "\u{043F}", false),
    ("percnt", "%", false),
    ("period", ".", false),
    ("permil", "\u{2030}", false),
    ("perp", "\u{22A5}", false),
    ("pertenk", "\u{2031}", false),
    ("pfr", "\u{1D52D}", false),
    ("phi", "\u{03C6}", false),
    ("phiv", "\u{03D5}", false),
    ("phmmat", "\u{2133}", false),
    ("phone", "\u{260E}", false),
    ("pi", "\u{03C0}", false),
    ("pitchfork", "\u{22D4}", false),
    ("piv", "\u{03D6}", false),
    ("planck", "\u{210F}", false),
    ("planckh", "\u{210E}", false),
    ("plankv", "\u{210F}", false),
    ("plus", "+", false),
    ("plusacir", "\u{2A23}", false),
    ("plusb", "\u{229E}", false),
    ("pluscir", "\u{2A22}", false),
    ("plusdo", "\u{2214}", false),
    ("plusdu", "\u{2A25}", false),
    ("pluse", "\u{2A72}", false),
    ("plusmn", "\u{00B1}", true),
    ("plussim", "\u{2A26}", false),
    ("plustwo", "\u{2A27}", false),
    ("pm", "\u{00B1}", false),
    ("pointint", "\u{2A15}", false),
    ("popf", "\u{1D561}", false),
    ("pound", "\u{00A3}", true),
    ("pr", "\u{227A}", false),
    ("prE", "\u{2AB3}", false),
    ("prap", "\u{2AB7}", false),
    ("prcue", "\u{227C}", false),
    ("pre", "\u{2AAF}", false),
    ("prec", "\u{227A}", false),
    ("precapprox", "\u{2AB7}", false),
    ("preccurlyeq", "\u{227C}", false),
    ("preceq", "\u{2AAF}", false),
    ("precnapprox", "\u{2AB9}", false),
    ("precneqq", "\u{2AB5}", false),
    ("precnsim", "\u{22E8}", false),
    ("precsim", "\u{227E}", false),
    ("prime", "\u{2032}", false),
    ("primes", "\u{2119}", false),
    ("prnE", "\u{2AB5}", false),
    ("prnap", "\u{2AB9}", false),
    ("prnsim", "\u{22E8}", false),
    ("prod", "\u{220F}", false),
    ("profalar", "\u{232E}", false),
    ("profline", "\u{2312}", false),
    ("profsurf", "\u{2313}", false),
    ("prop", "\u{221D}", false),
    ("propto", "\u{221D}", false),
    ("prsim", "\u{227E}", false),
    ("prurel", "\u{22B0}", false),
    ("pscr", "\u{1D4C5}", false),
    ("psi", "\u{03C8}", false),
    ("puncsp", "\u{2008}", false),
    ("qfr", "\u{1D52E}", false),
    ("qint", "\u{2A0C}", false),
    ("qopf", "\u{1D562}", false),
    ("qprime", "\u{2057}", false),
    ("qscr", "\u{1D4C6}", false),
    ("quaternions", "\u{210D}", false),
    ("quatint", "\u{2A16}", false),
    ("quest", "?", false),
    ("questeq", "\u{225F}", false),
    ("quot", "\"", true),
    ("rAarr", "\u{21DB}", false),
    ("rArr", "\u{21D2}", false),
    ("rAtail", "\u{291C}", false),
    ("rBarr", "\u{290F}", false),
    ("rHar", "\u{2964}", false),
    ("race", "\u{223D}\u{0331}", false),
    ("racute", "\u{0155}", false),
    ("radic", "\u{221A}", false),
    ("raemptyv", "\u{29B3}", false),
    ("rang", "\u{27E9}", false),
    ("rangd", "\u{2992}", false),
    ("range", "\u{29A5}", false),
    ("rangle", "\u{27E9}", false),
    ("raquo", "\u{00BB}", true),
    ("rarr", "\u{2192}", false),
    ("rarrap", "\u{2975}", false),
    ("rarrb", "\u{21E5}", false),
    ("rarrbfs", "\u{2920}", false),
    ("rarrc", "\u{2933}", false),
    ("rarrfs", "\u{291E}", false),
    ("rarrhk", "\u{21AA}", false),
    ("rarrlp", "\u{21AC}", false),
    ("rarrpl", "\u{2945}", false),
    ("rarrsim", "\u{2974}", false),
    ("rarrtl", "\u{21A3}", false),
    ("rarrw", "\u{219D}", false),
    ("ratail", "\u{291A}", false),
    ("ratio", "\u{2236}", false),
    ("rationals", "\u{211A}", false),
    ("rbarr", "\u{290D}", false),
    ("rbbrk", "\u{2773}", false),
    ("rbrace", "}", false),
    ("rbrack", "]", false),
    ("rbrke", "\u{298C}", false),
    ("rbrksld", "\u{298E}", false),
    ("rbrkslu", "\u{2990}", false),
    ("rcaron", "\u{0159}", false),
    ("rcedil", "\u{0157}", false),
    ("rceil", "\u{2309}", false),
    ("rcub", "}", false),
    ("rcy", "\u{0440}", false),
    ("rdca", "\u{2937}", false),
    ("rdldhar", "\u{2969}", false),
    ("rdquo", "\u{201D}", false),
    ("rdquor", "\u{201D}", false),
    ("rdsh", "\u{21B3}", false),
    ("real", "\u{211C}", false),
    ("realine", "\u{211B}", false),
    ("realpart", "\u{211C}", false),
    ("reals", "\u{211D}", false),
    ("rect", "\u{25AD}", false),
    ("reg", "\u{00AE}", true),
    ("rfisht", "\u{297D}", false),
    ("rfloor", "\u{230B}", false),
    ("rfr", "\u{1D52F}", false),
    ("rhard", "\u{21C1}", false),
    ("rharu", "\u{21C0}", false),
    ("rharul", "\u{296C}", false),
    ("rho", "\u{03C1}", false),
    ("rhov", "\u{03F1}", false),
    ("rightarrow", "\u{2192}", false),
    ("rightarrowtail", "\u{21A3}", false),
    ("rightharpoondown", "\u{21C1}", false),
    ("rightharpoonup", "\u{21C0}", false),
    ("rightleftarrows", "\u{21C4}", false),
    ("rightleftharpoons", "\u{21CC}", false),
    ("rightrightarrows", "\u{21C9}", false),
    ("rightsquigarrow", "\u{219D}", false),
    ("rightthreetimes", "\u{22CC}", false),
    ("ring", "\u{02DA}", false),
    ("risingdotseq", "\u{2253}", false),
    ("rlarr", "\u{21C4}", false),
    ("rlhar", "\u{21CC}", false),
    ("rlm", "\u{200F}", false),
    ("rmoust", "\u{23B1}", false),
    ("rmoustache", "\u{23B1}", false),
    ("rnmid", "\u{2AEE}", false),
    ("roang", "\u{27ED}", false),
    ("roarr", "\u{21FE}", false),
    ("robrk", "\u{27E7}", false),
    ("ropar", "\u{2986}", false),
    ("ropf", "\u{1D563}", false),
    ("roplus", "\u{2A2E}", false),
    ("rotimes", "\u{2A35}", false),
    ("rpar", ")", false),
    ("rpargt", "\u{2994}", false),
    ("rppolint", "\u{2A12}", false),
    ("rrarr", "\u{21C9}", false),
    ("rsaquo", "\u{203A}", false),
    ("rscr", "\u{1D4C7}", false),
    ("rsh", "\u{21B1}", false),
    ("rsqb", "]", false),
    ("rsquo", "\u{2019}", false),
    ("rsquor", "\u{2019}", false),
    ("rthree", "\u{22CC}", false),
    ("rtimes", "\u{22CA}", false),
    ("rtri", "\u{25B9}", false),
    ("rtrie", "\u{22B5}", false),
    ("rtrif", "\u{25B8}", false),
    ("rtriltri", "\u{29CE}", false),
    ("ruluhar", "\u{2968}", false),
    ("rx", "\u{211E}", false),
    ("sacute", "\u{015B}", false),
    ("sbquo", "\u{201A}", false),
    ("sc", "\u{227B}", false),
    ("scE", "\u{2AB4}", false),
    ("scap", "\u{2AB8}", false),
    ("scaron", "\u{0161}", false),
    ("sccue", "\u{227D}", false),
    ("sce", "\u{2AB0}", false),
    ("scedil", "\u{015F}", false),
    ("scirc", "\u{015D}", false),
    ("scnE", "\u{2AB6}", false),
    ("scnap", "\u{2ABA}", false),
    ("scnsim", "\u{22E9}", false),
    ("scpolint", "\u{2A13}", false),
    ("scsim", "\u{227F}", false),
    ("scy", "\u{0441}", false),
    ("sdot", "\u{22C5}", false),
    ("sdotb", "\u{22A1}", false),
    ("sdote", "\u{2A66}", false),
    ("seArr", "\u{21D8}", false),
    ("searhk", "\u{2925}", false),
    ("searr", "\u{2198}", false),
    ("searrow", "\u{2198}", false),
    ("sect", "\u{00A7}", true),
    ("semi", ";", false),
    ("seswar", "\u{2929}", false),
    ("setminus", "\u{2216}", false),
    ("setmn", "\u{2216}", false),
    ("sext", "\u{2736}", false),
    ("sfr", "\u{1D530}", false),
    ("sfrown", "\u{2322}", false),
    ("sharp", "\u{266F}", false),
    ("shchcy", "\u{0449}", false),
    ("shcy", "\u{0448}", false),
    ("shortmid", "\u{2223}", false),
    ("shortparallel", "\u{2225}", false),
    ("shy", "\u{00AD}", true),
    ("sigma", "\u{03C3}", false),
    ("sigmaf", "\u{03C2}", false),
    ("sigmav", "\u{03C2}", false),
    ("sim", "\u{223C}", false),
    ("simdot", "\u{2A6A}", false),
    ("sime", "\u{2243}", false),
    ("simeq", "\u{2243}", false),
    ("simg", "\u{2A9E}", false),
    ("simgE", "\u{2AA0}", false),
    ("siml", "\u{2A9D}", false),
    ("simlE", "\u{2A9F}", false),
    ("simne", "\u{2246}", false),
    ("simplus", "\u{2A24}", false),
    ("simrarr", "\u{2972}", false),
    ("slarr", "\u{2190}", false),
    ("smallsetminus", "\u{2216}", false),
    ("smashp", "\u{2A33}", false),
    ("smeparsl", "\u{29E4}", false),
    ("smid", "\u{2223}", false),
    ("smile", "\u{2323}", false),
    ("smt", "\u{2AAA}", false),
    ("smte", "\u{2AAC}", false),
    ("smtes", "\u{2AAC}\u{FE00}", false),
    ("softcy", "\u{044C}", false),
    ("sol", "/", false),
    ("solb", "\u{29C4}", false),
    ("solbar", "\u{233F}", false),
    ("sopf", "\u{1D564}", false),
    ("spades", "\u{2660}", false),
    ("spadesuit", "\u{2660}", false),
    ("spar", "\u{2225}", false),
    ("sqcap", "\u{2293}", false),
    ("sqcaps", "\u{2293}\u{FE00}", false),
    ("sqcup", "\u{2294}", false),
    ("sqcups", "\u{2294}\u{FE00}", false),
    ("sqsub", "\u{228F}", false),
    ("sqsube", "\u{2291}", false),
    ("sqsubset", "\u{228F}", false),
    ("sqsubseteq", "\u{2291}", false),
    ("sqsup", "\u{2290}", false),
    ("sqsupe", "\u{2292}", false),
    ("sqsupset", "\u{2290}", false),
    ("sqsupseteq", "\u{2292}", false),
    ("squ", "\u{25A1}", false),
    ("square", "\u{25A1}", false),
    ("squarf", "\u{25AA}", false),
    ("squf", "\u{25AA}", false),
    ("srarr", "\u{2192}", false),
    ("sscr", "\u{1D4C8}", false),
    ("ssetmn", "\u{2216}", false),
    ("ssmile", "\u{2323}", false),
    ("sstarf", "\u{22C6}", false),
    ("star", "\u{2606}", false),
    ("starf", "\u{2605}", false),
    ("straightepsilon", "\u{03F5}", false),
    ("straightphi", "\u{03D5}", false),
    ("strns", "\u{00AF}", false),
    ("sub", "\u{2282}", false),
    ("subE", "\u{2AC5}", false),
    ("subdot", "\u{2ABD}", false),
    ("sube", "\u{2286}", false),
    ("subedot", "\u{2AC3}", false),
    ("submult", "\u{2AC1}", false),
    ("subnE", "\u{2ACB}", false),
    ("subne", "\u{228A}", false),
    ("subplus", "\u{2ABF}", false),
    ("subrarr", "\u{2979}", false),
    ("subset", "\u{2282}", false),
    ("subseteq", "\u{2286}", false),
    ("subseteqq", "\u{2AC5}", false),
    ("subsetneq", "\u{228A}", false),
    ("subsetneqq", "\u{2ACB}", false),
    ("subsim", "\u{2AC7}", false),
    ("subsub", "\u{2AD5}", false),
    ("subsup", "\u{2AD3}", false),
    ("succ", "\u{227B}", false),
    ("succapprox", "\u{2AB8}", false),
    ("succcurlyeq", "\u{227D}", false),
    ("succeq", "\u{2AB0}", false),
    ("succnapprox", "\u{2ABA}", false),
    ("succneqq", "\u{2AB6}", false),
    ("succnsim", "\u{22E9}", false),
    ("succsim", "\u{227F}", false),
    ("sum", "\u{2211}", false),
    ("sung", "\u{266A}", false),
    ("sup", "\u{2283}", false),
    ("sup1", "\u{00B9}", true),
    ("sup2", "\u{00B2}", true),
    ("sup3", "\u{00B3}", true),
    ("supE", "\u{2AC6}", false),
    ("supdot", "\u{2ABE}", false),
    ("supdsub", "\u{2AD8}", false),
    ("supe", "\u{2287}", false),
    ("supedot", "\u{2AC4}", false),
    ("suphsol", "\u{27C9}", false),
    ("suphsub", "\u{2AD7}", false),
    ("suplarr", "\u{297B}", false),
    ("supmult", "\u{2AC2}", false),
    ("supnE", "\u{2ACC}", false),
    ("supne", "\u{228B}", false),
    ("supplus", "\u{2AC0}", false),
    ("supset", "\u{2283}", false),
    ("supseteq", "\u{2287}", false),
    ("supseteqq", "\u{2AC6}", false),
    ("supsetneq", "\u{228B}", false),
    ("supsetneqq", "\u{2ACC}", false),
    ("supsim", "\u{2AC8}", false),
    ("supsub", "\u{2AD4}", false),
    ("supsup", "\u{2AD6}", false),
    ("swArr", "\u{21D9}", false),
    ("swarhk", "\u{2926}", false),
    ("swarr", "\u{2199}", false),
    ("swarrow", "\u{2199}", false),
    ("swnwar", "\u{292A}", false),
    ("szlig", "\u{00DF}", true),
    ("target", "\u{2316}", false),
    ("tau", "\u{03C4}", false),
    ("tbrk", "\u{23B4}", false),
    ("tcaron", "\u{0165}", false),
    ("tcedil", "\u{0163}", false),
    ("tcy", "\u{0442}", false),
    ("tdot", "\u{20DB}", false),
    ("telrec", "\u{2315}", false),
    ("tfr", "\u{1D531}", false),
    ("there4", "\u{2234}", false),
    ("therefore", "\u{2234}", false),
    ("theta", "\u{03B8}", false),
    ("thetasym", "\u{03D1}", false),
    ("thetav", "\u{03D1}", false),
    ("thickapprox", "\u{2248}", false),
    ("thicksim", "\u{223C}", false),
    ("thinsp", "\u{2009}", false),
    ("thkap", "\u{2248}", false),
    ("thksim", "\u{223C}", false),
    ("thorn", "\u{00FE}", true),
    ("tilde", "\u{02DC}", false),
    ("times", "\u{00D7}", true),
    ("timesb", "\u{22A0}", false),
    ("timesbar", "\u{2A31}", false),
    ("timesd", "\u{2A30}", false),
    ("tint", "\u{222D}", false),
    ("toea", "\u{2928}", false),
    ("top", "\u{22A4}", false),
    ("topbot", "\u{2336}", false),
    ("topcir", "\u{2AF1}", false),
    ("topf", "\u{1D565}", false),
    ("topfork", "\u{2ADA}", false),
    ("tosa", "\u{2929}", false),
    ("tprime", "\u{2034}", false),
    ("trade", "\u{2122}", false),
    ("triangle", "\u{25B5}", false),
    ("triangledown", "\u{25BF}", false),
    ("triangleleft", "\u{25C3}", false),
    ("trianglelefteq", "\u{22B4}", false),
    ("triangleq", "\u{225C}", false),
    ("triangleright", "\u{25B9}", false),
    ("trianglerighteq", "\u{22B5}", false),
    ("tridot", "\u{25EC}", false),
    ("trie", "\u{225C}", false),
    ("triminus", "\u{2A3A}", false),
    ("triplus", "\u{2A39}", false),
    ("trisb", "\u{29CD}", false),
    ("tritime", "\u{2A3B}", false),
    ("trpezium", "\u{23E2}", false),
    ("tscr", "\u{1D4C9}", false),
    ("tscy", "\u{0446}", false),
    ("tshcy", "\u{045B}", false),
    ("tstrok", "\u{0167}", false),
    ("twixt", "\u{226C}", false),
    ("twoheadleftarrow", "\u{219E}", false),
    ("twoheadrightarrow", "\u{21A0}", false),
    ("uArr", "\u{21D1}", false),
    ("uHar", "\u{2963}", false),
    ("uacute", "\u{00FA}", true),
    ("uarr", "\u{2191}", false),
    ("ubrcy", "\u{045E}", false),
    ("ubreve", "\u{016D}", false),
    ("ucirc", "\u{00FB}", true),
    ("ucy", "\u{0443}", false),
    ("udarr", "\u{21C5}", false),
    ("udblac", "\u{0171}", false),
    ("udhar", "\u{296E}", false),
    ("ufisht", "\u{297E}", false),
    ("ufr", "\u{1D532}", false),
    ("ugrave", "\u{00F9}", true),
    ("uharl", "\u{21BF}", false),
    ("uharr", "\u{21BE}", false),
    ("uhblk", "\u{2580}", false),
    ("ulcorn", "\u{231C}", false),
    ("ulcorner", "\u{231C}", false),
    ("ulcrop", "\u{230F}", false),
    ("ultri", "\u{25F8}", false),
    ("umacr", "\u{016B}", false),
    ("uml", "\u{00A8}", true),
    ("uogon", "\u{0173}", false),
    ("uopf", "\u{1D566}", false),
    ("uparrow", "\u{2191}", false),
    ("updownarrow", "\u{2195}", false),
    ("upharpoonleft", "\u{21BF}", false),
    ("upharpoonright", "\u{21BE}", false),
    ("uplus", "\u{228E}", false),
    ("upsi", "\u{03C5}", false),
    ("upsih", "\u{03D2}", false),
    ("upsilon", "\u{03C5}", false),
    ("upuparrows", "\u{21C8}", false),
    ("urcorn", "\u{231D}", false),
    ("urcorner", "\u{231D}", false),
    ("urcrop", "\u{230E}", false),
    ("uring", "\u{016F}", false),
    ("urtri", "\u{25F9}", false),
    ("uscr", "\u{1D4CA}", false),
    ("utdot", "\u{22F0}", false),
    ("utilde", "\u{0169}", false),
    ("utri", "\u{25B5}", false),
    ("utrif", "\u{25B4}", false),
    ("uuarr", "\u{21C8}", false),
    ("uuml", "\u{00FC}", true),
    ("uwangle", "\u{29A7}", false),
    ("vArr", "\u{21D5}", false),
    ("vBar", "\u{2AE8}", false),
    ("vBarv", "\u{2AE9}", false),
    ("vDash", "\u{22A8}", false),
    ("vangrt", "\u{299C}", false),
    ("varepsilon", "\u{03F5}", false),
    ("varkappa", "\u{03F0}", false),
    ("varnothing", "\u{2205}", false),
    ("varphi", "\u{03D5}", false),
    ("varpi", "\u{03D6}", false),
    ("varpropto", "\u{221D}", false),
    ("varr", "\u{2195}", false),
    ("varrho", "\u{03F1}", false),
    ("varsigma", "\u{03C2}", false),
    ("varsubsetneq", "\u{228A}\u{FE00}", false),
    ("varsubsetneqq", "\u{2ACB}\u{FE00}", false),
    ("varsupsetneq", "\u{228B}\u{FE00}", false),
    ("varsupsetneqq", "\u{2ACC}\u{FE00}", false),
    ("vartheta", "\u{03D1}", false),
    ("vartriangleleft", "\u{22B2}", false),
    ("vartriangleright", "\u{22B3}", false),
    ("vcy", "\u{0432}", false),
    ("vdash", "\u{22A2}", false),
    ("vee", "\u{2228}", false),
    ("veebar", "\u{22BB}", false),
    ("veeeq", "\u{225A}", false),
    ("vellip", "\u{22EE}", false),
    ("verbar", "|", false),
    ("vert", "|", false),
    ("vfr", "\u{1D533}", false),
    ("vltri", "\u{22B2}", false),
    ("vnsub", "\u{2282}\u{20D2}", false),
    ("vnsup", "\u{2283}\u{20D2}", false),
    ("vopf", "\u{1D567}", false),
    ("vprop", "\u{221D}", false),
    ("vrtri", "\u{22B3}", false),
    ("vscr", "\u{1D4CB}", false),
    ("vsubnE", "\u{2ACB}\u{FE00}", false),
    ("vsubne", "\u{228A}\u{FE00}", false),
    ("vsupnE", "\u{2ACC}\u{FE00}", false),
    ("vsupne", "\u{228B}\u{FE00}", false),
    ("vzigzag", "\u{299A}", false),
    ("wcirc", "\u{0175}", false),
    ("wedbar", "\u{2A5F}", false),
    ("wedge", "\u{2227}", false),
    ("wedgeq", "\u{2259}", false),
    ("weierp", "\u{2118}", false),
    ("wfr", "\u{1D534}", false),
    ("wopf", "\u{1D568}", false),
    ("wp", "\u{2118}", false),
    ("wr", "\u{2240}", false),
    ("wreath", "\u{2240}", false),
    ("wscr", "\u{1D4CC}", false),
    ("xcap", "\u{22C2}", false),
    ("xcirc", "\u{25EF}", false),
    ("xcup", "\u{22C3}", false),
    ("xdtri", "\u{25BD}", false),
    ("xfr", "\u{1D535}", false),
    ("xhArr", "\u{27FA}", false),
    ("xharr", "\u{27F7}", false),
    ("xi", "\u{03BE}", false),
    ("xlArr", "\u{27F8}", false),
    ("xlarr", "\u{27F5}", false),
    ("xmap", "\u{27FC}", false),
    ("xnis", "\u{22FB}", false),
    ("xodot", "\u{2A00}", false),
    ("xopf", "\u{1D569}", false),
    ("xoplus", "\u{2A01}", false),
    ("xotime", "\u{2A02}", false),
    ("xrArr", "\u{27F9}", false),
    ("xrarr", "\u{27F6}", false),
    ("xscr", "\u{1D4CD}", false),
    ("xsqcup", "\u{2A06}", false),
    ("xuplus", "\u{2A04}", false),
    ("xutri", "\u{25B3}", false),
    ("xvee", "\u{22C1}", false),
    ("xwedge", "\u{22C0}", false),
    ("yacute", "\u{00FD}", true),
    ("yacy", "\u{044F}", false),
    ("ycirc", "\u{0177}", false),
    ("ycy", "\u{044B}", false),
    ("yen", "\u{00A5}", true),
    ("yfr", "\u{1D536}", false),
    ("yicy", "\u{0457}", false),
    ("yopf", "\u{1D56A}", false),
    ("yscr", "\u{1D4CE}", false),
    ("yucy", "\u{044E}", false),
    ("yuml", "\u{00FF}", true),
    ("zacute", "\u{017A}", false),
    ("zcaron", "\u{017E}", false),
    ("zcy", "\u{0437}", false),
    ("zdot", "\u{017C}", false),
    ("zeetrf", "\u{2128}", false),
    ("zeta", "\u{03B6}", false),
    ("zfr", "\u{1D537}", false),
    ("zhcy", "\u{0436}", false),
    ("zigrarr", "\u{21DD}", false),
    ("zopf", "\u{1D56B}", false),
    ("zscr", "\u{1D4CF}", false),
    ("zwj", "\u{200D}", false),
    ("zwnj", "\u{200C}", false),
];
