use super::{AssessmentText, CategoryText, LocaleText, QuestionText, RatingText};
use crate::questionnaire::domain::Rating;

pub(super) static TEXT: LocaleText = LocaleText {
    app_name: "ColorCompass – Dein innerer Kompass",
    app_description: "Entdecke deine beruflichen Persönlichkeitspräferenzen! Dieser Fragebogen ermöglicht dir eine erste Einschätzung deines Persönlichkeitstyps im beruflichen Kontext anhand von vier verschiedenen Farbtypen und gibt dir Einblicke in typische Verhaltensweisen.",
    instructions: "Für jede der folgenden Fragen wirst du vier Aussagen sehen. Bitte bewerte jede Aussage, je nachdem, wie sehr sie auf dich zutrifft, indem du jeder Aussage eine der folgenden Kategorien zuweist:",
    important_instruction: "Wichtig: Innerhalb jeder Frage muss jede Bewertungskategorie (z.B. \"Trifft sehr zu\") genau einmal vergeben werden. Du kannst also nicht zwei Aussagen mit \"Trifft sehr zu\" bewerten.",
    important_notice: "Diese Ergebnisse und Analysen dienen ausschließlich deiner Selbstreflexion und Unterhaltung. Sie stellen keine wissenschaftlich validierte psychologische Diagnose dar und sind nicht mit offiziellen Testverfahren oder anderen geschützten Systemen verbunden oder von diesen abgeleitet. Bitte interpretiere die Ergebnisse mit Bedacht.",
    results_title: "Deine Ergebnisse",
    type_prefix: "Typ:",
    balanced_type_label: "Ausgeglichen",
    type_not_determined: "Nicht ermittelt",
    error_unique_rating: "Die Bewertung \"{label}\" wurde bereits für eine andere Aussage in dieser Frage vergeben. Bitte wähle eine einzigartige Bewertung für jede Aussage.",
    error_complete_question: "Bitte bewerte alle vier Aussagen mit unterschiedlichen Kategorien, bevor du fortfährst.",
    question_label: "Frage {current} von {total}",
    progress_label: "Fortschritt",
    statement_header: "Aussage",
    rating_header: "Trifft zu",
    ratings: [
        RatingText {
            rating: Rating::VeryMuch,
            label: "Trifft sehr zu",
            short: "Sehr zu",
            explanation: "Dies beschreibt dich sehr gut.",
        },
        RatingText {
            rating: Rating::Applies,
            label: "Trifft zu",
            short: "Zu",
            explanation: "Dies trifft auf dich zu.",
        },
        RatingText {
            rating: Rating::Less,
            label: "Trifft weniger zu",
            short: "Weniger zu",
            explanation: "Dies trifft eher weniger auf dich zu.",
        },
        RatingText {
            rating: Rating::Least,
            label: "Trifft am wenigsten zu",
            short: "Gar nicht",
            explanation: "Dies beschreibt dich kaum oder gar nicht.",
        },
    ],
    categories: [
        CategoryText {
            name: "Dynamikrot",
            description: "Deutet Energie, Durchsetzungskraft und Entschlossenheit an. Zielstrebig, energiegeladen, handlungsorientiert.",
            strengths: "entschlossen, willensstark, ergebnisorientiert, direkt, wettbewerbsorientiert, schnell entscheidend",
            challenges: "ungeduldig, kann andere überfordern, geringe Detailorientierung bei Routine, risikofreudig, kann Gefühle anderer übersehen",
            motivation: "Ergebnisse, Herausforderung, Kontrolle, Gewinnen, Unabhängigkeit",
            communication: "direkt, auf den Punkt, fordernd, ergebnisorientiert",
        },
        CategoryText {
            name: "Freigeistgelb",
            description: "Verkörpert Offenheit, Kreativität und Unkonventionalität. Unabhängig, enthusiastisch, ideenreich.",
            strengths: "enthusiastisch, optimistisch, kreativ, kommunikativ, überzeugend, inspirierend",
            challenges: "unorganisiert, detailarm, kann zu viel auf einmal wollen, verliert bei Routine schnell Interesse, manchmal oberflächlich",
            motivation: "Anerkennung, Spaß, soziale Interaktion, neue Ideen, Freiheit",
            communication: "lebhaft, inspirierend, offen, manchmal abschweifend",
        },
        CategoryText {
            name: "Balancegrün",
            description: "Betonung von Ausgeglichenheit, Harmonie und Stabilität. Harmonisch, ruhig, diplomatisch.",
            strengths: "geduldig, teamfähig, unterstützend, zuverlässig, loyal, guter Zuhörer",
            challenges: "konfliktscheu, zögerlich bei Entscheidungen, widerstrebend gegenüber Veränderungen, kann nachtragend sein",
            motivation: "Harmonie, Sicherheit, Zusammenarbeit, Stabilität, Wertschätzung",
            communication: "freundlich, rücksichtsvoll, abwägend, manchmal indirekt",
        },
        CategoryText {
            name: "Logikblau",
            description: "Steht für Struktur, Rationalität und Klarheit. Analytisch, sachlich, präzise.",
            strengths: "analytisch, präzise, sorgfältig, faktenorientiert, qualitätsbewusst, systematisch",
            challenges: "perfektionistisch, kritisch (auch sich selbst gegenüber), kann distanziert wirken, detailverliebt, braucht Zeit für Entscheidungen",
            motivation: "Logik, Genauigkeit, Fakten, Qualität, klare Strukturen",
            communication: "sachlich, präzise, datengestützt, manchmal zu detailliert",
        },
    ],
    assessment: AssessmentText {
        no_scores: "Es konnten keine Ergebnisse berechnet werden, da keine Punkte vergeben wurden. Bitte fülle den Fragebogen aus.",
        balanced_intro: "Deine Antworten deuten auf ein **ausgewogenes Persönlichkeitsprofil** hin, bei dem keine einzelne Farbe stark dominiert. Dies spricht für eine bemerkenswerte Vielseitigkeit und Anpassungsfähigkeit. Du scheinst in der Lage zu sein, je nach Situation unterschiedliche Stärken und Herangehensweisen zu nutzen.",
        balanced_distribution: "Die prozentuale Verteilung deiner Farbanteile ist wie folgt:",
        balanced_strongest_emphasis: "Innerhalb dieser Ausgewogenheit ist die Präferenz für **{first}** dennoch am deutlichsten erkennbar. Dies legt nahe, dass du dazu neigst, Qualitäten wie {first_strength_1} und {first_strength_2} etwas häufiger zu zeigen. Deine Motivation könnte hierbei oft von Aspekten wie {first_motivation} geleitet sein. Die Eigenschaften der zweitstärksten Farbe, **{second}** ({second_percentage}%), runden dein Profil ab und bieten zusätzliche Flexibilität.",
        balanced_general_emphasis: "Die Qualitäten von **{first}** ({first_percentage}%) und **{second}** ({second_percentage}%) sind in deinem Profil am präsentesten und wirken oft im Zusammenspiel. Dies deutet auf eine flexible Kombination ihrer jeweiligen Stärken hin.",
        balanced_advice: "Deine Ausgewogenheit ist eine Stärke, die dir erlaubt, flexibel zu agieren. Achte darauf, dass diese Flexibilität nicht zu Unentschlossenheit führt, wenn klare Positionierungen gefragt sind. Manchmal kann es hilfreich sein, bewusst eine deiner stärkeren Präferenzen zu betonen, um Ziele zu erreichen oder Entscheidungen zu treffen.",
        dominant_intro: "Deine Antworten deuten auf ein Persönlichkeitsprofil hin, bei dem **{first}** ({first_percentage}%) am stärksten ausgeprägt ist, gefolgt von **{second}** ({second_percentage}%).",
        dominant_preference: "**Dominante Präferenz: {name}**\nPersonen mit einer hohen Präferenz für {name} sind oft {strengths}. Sie werden motiviert durch {motivation} und kommunizieren typischerweise {communication}. Mögliche Herausforderungen oder Entwicklungsfelder könnten {challenges} sein.",
        secondary_preference: "**Zweitstärkste Präferenz: {name}**\nDeine zweitstärkste Präferenz, {name}, ergänzt dein Profil. Typische Stärken sind hier {strengths}. Als Motivation dient oft {motivation}. Die Kommunikation ist meist {communication}. Achte auf mögliche Fallstricke wie {challenges}.",
        combo_red_yellow: "**Kombination im Fokus (Rot-Gelb):** Diese Mischung deutet auf eine sehr dynamische, ergebnisorientierte und gleichzeitig inspirierende Persönlichkeit hin. Du packst gerne Dinge an und kannst andere mit deiner Energie und deinen Ideen mitreißen. Achte darauf, dass bei aller Begeisterung die Details nicht zu kurz kommen und du deine Energie fokussiert einsetzt.",
        combo_green_blue: "**Kombination im Fokus (Grün-Blau):** Diese Kombination weist auf eine gewissenhafte, zuverlässige und detailorientierte Persönlichkeit hin. Du legst Wert auf Qualität, Stabilität und durchdachte Entscheidungen. Manchmal könntest du davon profitieren, etwas flexibler auf neue Situationen zu reagieren und schneller ins Handeln zu kommen.",
        combo_red_blue: "**Kombination im Fokus (Rot-Blau):** Diese Mischung deutet auf eine entschlossene, zielstrebige und analytische Persönlichkeit hin. Du triffst Entscheidungen gerne auf Basis von Fakten und setzt diese dann konsequent um. Es könnte hilfreich sein, die emotionalen Aspekte und die Bedürfnisse anderer bewusster in deine Überlegungen einzubeziehen.",
        combo_yellow_green: "**Kombination im Fokus (Gelb-Grün):** Diese Kombination spricht für eine menschenorientierte, kooperative und optimistische Persönlichkeit. Du schätzt Harmonie und positive Beziehungen und kannst andere gut motivieren. Achte darauf, dass du bei aller Rücksichtnahme deine eigenen Ziele nicht vernachlässigst und auch mal klare Grenzen setzt.",
        less_in_focus: "**Weniger im Fokus ({third} & {fourth}):**\nDie Eigenschaften von {third} ({third_percentage}%) und insbesondere {fourth} ({fourth_percentage}%) scheinen in deinem Profil weniger stark ausgeprägt zu sein. Das bedeutet nicht, dass du diese Eigenschaften nicht besitzt, sondern dass sie in deinem typischen Verhalten möglicherweise seltener im Vordergrund stehen. Es kann nützlich sein, sich dieser Bereiche bewusst zu sein, besonders in Situationen, die genau diese Qualitäten erfordern.",
        conclusion: "Nutze diese Einschätzung als Anregung zur Selbstreflexion. Deine Persönlichkeit ist einzigartig und facettenreich. Viel Spaß beim Entdecken deiner Stärken und Potenziale!",
    },
    questions: [
    QuestionText {
        text: "Im beruflichen Alltag fühlst du dich am produktivsten, wenn du...",
        options: [
            "deine Energie in neue, ergebnisorientierte Projekte stecken kannst.",
            "innovative Konzepte entwickeln und im Team präsentieren kannst.",
            "ein harmonisches und stabiles Arbeitsumfeld für alle sicherstellen kannst.",
            "komplexe Sachverhalte detailliert analysieren und präzise planen kannst.",
        ],
    },
    QuestionText {
        text: "Bei Meinungsverschiedenheiten im Team neigst du dazu,...",
        options: [
            "deinen Standpunkt klar zu vertreten und eine schnelle Entscheidung anzustreben.",
            "mit kreativen Ansätzen oder Humor die Situation aufzulockern und neue Perspektiven zu eröffnen.",
            "einen Konsens zu suchen und auf ein gutes Miteinander zu achten.",
            "dich zunächst zurückzuziehen, um die verschiedenen Argumente objektiv zu bewerten.",
        ],
    },
    QuestionText {
        text: "Kollegen würden deine Arbeitsweise am ehesten als _______ beschreiben.",
        options: [
            "zielorientiert und durchsetzungsstark.",
            "inspirierend und ideenreich.",
            "kooperativ und zuverlässig.",
            "analytisch und gewissenhaft.",
        ],
    },
    QuestionText {
        text: "Wenn du ein neues berufliches Projekt startest, fokussierst du dich zuerst auf...",
        options: [
            "die schnelle Umsetzung erster Schritte und das Erreichen sichtbarer Meilensteine.",
            "das Brainstorming vielfältiger Ideen und unkonventioneller Lösungsansätze.",
            "den Aufbau eines tragfähigen Plans und die Sicherstellung der notwendigen Ressourcen und Teamabstimmung.",
            "die detaillierte Analyse potenzieller Risiken und die Erstellung exakter Spezifikationen.",
        ],
    },
    QuestionText {
        text: "Deine größte Stärke im Berufsleben ist deine Fähigkeit,...",
        options: [
            "auch unter Druck schnelle und klare Entscheidungen zu treffen.",
            "andere für eine Vision zu begeistern und ein positives Arbeitsklima zu fördern.",
            "ein unterstützendes und stabiles Umfeld zu schaffen, in dem sich jeder einbringen kann.",
            "komplexe Probleme systematisch zu lösen und für hohe Qualitätsstandards zu sorgen.",
        ],
    },
    QuestionText {
        text: "Im Berufsalltag fühlst du dich am meisten gestresst, wenn...",
        options: [
            "du das Gefühl hast, die Kontrolle über wichtige Prozesse zu verlieren oder übergangen zu werden.",
            "deine Aufgaben monoton werden und es an kreativem Freiraum oder neuen Impulsen mangelt.",
            "Konflikte im Team die Zusammenarbeit belasten oder es zu Unstimmigkeiten kommt.",
            "du mit unklaren Anweisungen, unlogischen Prozessen oder mangelnder Präzision konfrontiert wirst.",
        ],
    },
    QuestionText {
        text: "Dein idealer Beitrag in einem Teamprojekt ist...",
        options: [
            "die Führung zu übernehmen, klare Ziele zu setzen und das Team zum Erfolg zu treiben.",
            "neue Ideen einzubringen, für Motivation zu sorgen und die Kommunikation zu fördern.",
            "für ein gutes Teamklima zu sorgen, unterstützend zu wirken und Vereinbarungen zuverlässig umzusetzen.",
            "Informationen sorgfältig zu prüfen, Prozesse zu optimieren und die Qualität sicherzustellen.",
        ],
    },
    QuestionText {
        text: "Du bist beruflich am zufriedensten, wenn du...",
        options: [
            "anspruchsvolle Ziele erreichst und für deine Leistungen Anerkennung erhältst.",
            "ständig Neues lernst, innovative Lösungen entwickeln und deine Ideen umsetzen kannst.",
            "einen wertvollen Beitrag zum Teamerfolg leistest und harmonische Arbeitsbeziehungen pflegst.",
            "komplexe Aufgaben erfolgreich abschließen und siehst, dass deine Arbeit höchsten Standards genügt.",
        ],
    },
    QuestionText {
        text: "Wenn du eine wichtige berufliche Entscheidung triffst, verlässt du dich am meisten auf...",
        options: [
            "deinen Instinkt und deine Entschlossenheit, auch wenn es Risiken birgt.",
            "deine Kreativität und Intuition, um innovative Wege zu finden.",
            "die Meinungen und Erfahrungen von Kollegen sowie den Konsens im Team.",
            "eine sorgfältige Analyse von Fakten, Daten und logischen Schlussfolgerungen.",
        ],
    },
    QuestionText {
        text: "Eine mögliche Herausforderung in deiner Arbeitsweise ist manchmal...",
        options: [
            "deine Ungeduld oder dein dominantes Auftreten, wenn Dinge nicht schnell genug gehen.",
            "eine Tendenz zur Unorganisiertheit oder das Übersehen von Details bei Routineaufgaben.",
            "deine Zögerlichkeit, klare Entscheidungen zu treffen, besonders wenn Konflikte drohen.",
            "dein Perfektionismus oder eine übermäßig kritische Haltung gegenüber Fehlern.",
        ],
    },
    QuestionText {
        text: "Du bevorzugst Arbeitsumgebungen, die...",
        options: [
            "dynamisch sind, schnelle Ergebnisse erfordern und dir Entscheidungsfreiheit lassen.",
            "kreativ, inspirierend und auf offene Kommunikation und Zusammenarbeit ausgerichtet sind.",
            "stabil, sicher und unterstützend sind, mit klaren Strukturen und gutem Teamgeist.",
            "strukturiert und gut organisiert sind und präzise, qualitativ hochwertige Arbeit ermöglichen.",
        ],
    },
    QuestionText {
        text: "Wenn du ein berufliches Ziel verfolgst, bist du...",
        options: [
            "hartnäckig und entschlossen, auch bei Widerständen nicht aufzugeben.",
            "flexibel und bereit, deine Strategie anzupassen, wenn sich Umstände ändern.",
            "geduldig und ausdauernd, und wartest auf den richtigen Moment für deine Schritte.",
            "methodisch und planen jeden Schritt sorgfältig, um Fehler zu minimieren.",
        ],
    },
    QuestionText {
        text: "Auf unvorhergesehene Veränderungen im Projektverlauf reagierst du, indem du...",
        options: [
            "sie als Chance für neue, mutige Lösungsansätze sehen und schnell handelst.",
            "dich rasch anpasst, neue Möglichkeiten erkunden und das Team motivieren.",
            "zunächst Zeit benötigst, um dich anzupassen und Stabilität wiederherzustellen, bevor du handelst.",
            "die Auswirkungen detailliert analysierst und einen überarbeiteten, logischen Plan entwickelst.",
        ],
    },
    QuestionText {
        text: "Deine größte berufliche Motivation ist...",
        options: [
            "Erfolg, das Erreichen von Zielen und die damit verbundene Anerkennung.",
            "die Möglichkeit, kreativ zu sein, neue Erfahrungen zu sammeln und andere zu inspirieren.",
            "ein sicheres Arbeitsumfeld, gute Beziehungen zu Kollegen und Wertschätzung für deine Loyalität.",
            "das Erlangen von Fachwissen, das Verstehen komplexer Zusammenhänge und das Liefern präziser Arbeit.",
        ],
    },
    QuestionText {
        text: "Im Team fühlst du dich am wohlsten, wenn du...",
        options: [
            "die Leitung innehaben oder maßgeblich die Richtung vorgeben kannst.",
            "deine Ideen frei äußern und in einer dynamischen, offenen Atmosphäre arbeiten kannst.",
            "als verlässliches Mitglied einen Beitrag zum gemeinsamen Erfolg leisten und Harmonie herrscht.",
            "deine analytischen Fähigkeiten einbringen und zur Qualitätssicherung beitragen kannst.",
        ],
    },
    QuestionText {
        text: "Du bist am effektivsten in deiner Arbeit, wenn du...",
        options: [
            "klare Ziele und die Freiheit hast, den Weg dorthin selbst zu bestimmen und schnell zu handeln.",
            "Raum für Experimente haben und unkonventionelle Ideen in einem flexiblen Umfeld verfolgen kannst.",
            "in einem unterstützenden Team arbeitest, in dem offene Kommunikation und gegenseitiger Respekt gepflegt werden.",
            "genügend Zeit und Informationen hast, um alle Details sorgfältig zu prüfen und deine Aufgaben präzise zu planen.",
        ],
    },
    QuestionText {
        text: "Deine bevorzugte Art, dich neues berufliches Wissen anzueignen, ist...",
        options: [
            "durch Ausprobieren, Learning-by-Doing und praktische Anwendung.",
            "durch Diskussionen mit Kollegen, Teilnahme an Workshops und den Austausch von Ideen.",
            "durch sorgfältige Beobachtung, das Anhören von Experten und schrittweise Einarbeitung.",
            "durch das Lesen von Fachliteratur, detaillierte Recherche und systematische Analyse von Informationen.",
        ],
    },
    QuestionText {
        text: "Wenn im Projekt ein Problem auftritt, suchst du nach...",
        options: [
            "einer direkten, pragmatischen und schnellen Lösung, um voranzukommen.",
            "kreativen, unkonventionellen Ansätzen und neuen Perspektiven zur Problemlösung.",
            "Unterstützung im Team und einem gemeinsamen Weg, der von allen getragen wird.",
            "einer gründlichen Ursachenanalyse und einem systematischen, datengestützten Vorgehen.",
        ],
    },
    QuestionText {
        text: "Du bist am besten in der Lage, Kollegen zu überzeugen, indem du...",
        options: [
            "deine Argumente klar, direkt und mit Nachdruck kommunizierst.",
            "Begeisterung für deine Ideen weckst und eine positive, motivierende Atmosphäre schaffst.",
            "Vertrauen aufbaust, aktiv zuhörst und die Bedürfnisse anderer berücksichtigst.",
            "logische Argumente, Fakten und detaillierte Daten präsentierst.",
        ],
    },
    QuestionText {
        text: "Deine größte Sorge im beruflichen Kontext ist...",
        options: [
            "Kontrollverlust über wichtige Projekte oder das Nichterreichen von Zielen.",
            "monotone Routineaufgaben oder ein Mangel an kreativen Herausforderungen.",
            "Konflikte im Team oder die Ablehnung deiner Person oder deiner Beiträge.",
            "Fehler zu machen, unvollständige Arbeit abzuliefern oder kritisiert zu werden.",
        ],
    },
    QuestionText {
        text: "In deiner beruflichen Rolle verbringst du deine Zeit am liebsten mit...",
        options: [
            "aktiven, herausfordernden Aufgaben, die schnelle Entscheidungen erfordern.",
            "kreativen Projekten, Brainstorming-Sitzungen oder dem Netzwerken mit Kollegen.",
            "Aufgaben, die Stabilität erfordern, und der Pflege guter Arbeitsbeziehungen.",
            "der Analyse komplexer Daten, der Optimierung von Prozessen oder der Recherche.",
        ],
    },
    QuestionText {
        text: "Deine typische Reaktion auf konstruktive Kritik von Vorgesetzten oder Kollegen ist...",
        options: [
            "sie als Herausforderung zu sehen, um deine Leistung direkt zu verbessern und Ergebnisse zu optimieren.",
            "sie als Ansporn zu nehmen, kreativer zu denken und neue Lösungsansätze zu finden.",
            "sie zunächst persönlich zu nehmen, aber dann nach Wegen zu suchen, die Harmonie wiederherzustellen und Erwartungen zu erfüllen.",
            "sie sorgfältig und objektiv zu analysieren und gegebenenfalls präzise Korrekturen vorzunehmen.",
        ],
    },
    QuestionText {
        text: "Du bist am besten in der Lage, ein Team zu führen, indem du...",
        options: [
            "klare Anweisungen gibst, Entscheidungen treffen und Ergebnisse konsequent einfordern.",
            "eine inspirierende Vision teilen, Begeisterung wecken und Freiräume für Kreativität schaffen.",
            "ein unterstützendes und vertrauensvolles Umfeld schaffen, in dem jeder Einzelne wertgeschätzt wird.",
            "logische Pläne erstellen, klare Prozesse definieren und eine strukturierte Vorgehensweise sicherstellen.",
        ],
    },
    QuestionText {
        text: "Deine Einstellung zu bestehenden Regeln und Unternehmensrichtlinien ist...",
        options: [
            "dass sie manchmal hinderlich sein können, wenn sie schnelle Entscheidungen oder Fortschritt blockieren.",
            "dass sie flexibel gehandhabt werden sollten, um Innovation und neue Ideen nicht zu behindern.",
            "dass sie wichtig sind, um ein faires und stabiles Arbeitsumfeld für alle zu gewährleisten.",
            "dass sie notwendig sind, um Effizienz, Qualität und Präzision in den Arbeitsabläufen zu sichern.",
        ],
    },
    QuestionText {
        text: "Beruflich bist du am zufriedensten, wenn du...",
        options: [
            "ein anspruchsvolles Ziel erreicht und deine Wettbewerbsfähigkeit unter Beweis gestellt hast.",
            "etwas Neues und Aufregendes initiiert und andere mit deiner Begeisterung angesteckt hast.",
            "anderen Kollegen geholfen, positive Beziehungen im Team gepflegt und zur Harmonie beigetragen haben.",
            "ein komplexes Problem gründlich analysiert, verstanden und eine qualitativ hochwertige Lösung implementiert hast.",
        ],
    },
    ],
};
