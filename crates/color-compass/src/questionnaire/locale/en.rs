use super::{AssessmentText, CategoryText, LocaleText, QuestionText, RatingText};
use crate::questionnaire::domain::Rating;

pub(super) static TEXT: LocaleText = LocaleText {
    app_name: "ColorCompass – Your Inner Compass",
    app_description: "Discover your professional personality preferences and get an initial assessment of your color type.",
    instructions: "For each of the following questions, you will see four statements. Please rate each statement according to how much it applies to you by assigning one of the following categories to each statement:",
    important_instruction: "Important: Within each question, each rating category (e.g., \"Applies very much\") must be assigned exactly once. You cannot rate two statements as \"Applies very much\".",
    important_notice: "These results and analyses are for self-reflection and entertainment purposes only. They do not constitute a scientifically validated psychological diagnosis and are not affiliated with or derived from official testing procedures or other protected systems. Please interpret the results thoughtfully.",
    results_title: "Your Results",
    type_prefix: "Type:",
    balanced_type_label: "Balanced",
    type_not_determined: "Not determined",
    error_unique_rating: "The rating \"{label}\" has already been used for another statement in this question. Please choose a unique rating for each statement.",
    error_complete_question: "Please rate all four statements with different categories before continuing.",
    question_label: "Question {current} of {total}",
    progress_label: "Progress",
    statement_header: "Statement",
    rating_header: "Applies to",
    ratings: [
        RatingText {
            rating: Rating::VeryMuch,
            label: "Applies very much",
            short: "Very much",
            explanation: "This describes you very well.",
        },
        RatingText {
            rating: Rating::Applies,
            label: "Applies",
            short: "Applies",
            explanation: "This applies to you.",
        },
        RatingText {
            rating: Rating::Less,
            label: "Applies less",
            short: "Less so",
            explanation: "This applies less to you.",
        },
        RatingText {
            rating: Rating::Least,
            label: "Applies least",
            short: "Not at all",
            explanation: "This hardly or not at all describes you.",
        },
    ],
    categories: [
        CategoryText {
            name: "Dynamic Red",
            description: "Suggests energy, assertiveness, and determination. Goal-oriented, energetic, action-oriented.",
            strengths: "decisive, strong-willed, results-oriented, direct, competitive, quick decision-maker",
            challenges: "impatient, can overwhelm others, low detail orientation in routine tasks, risk-taker, can overlook others' feelings",
            motivation: "results, challenge, control, winning, independence",
            communication: "direct, to the point, demanding, results-oriented",
        },
        CategoryText {
            name: "Free-Spirit Yellow",
            description: "Embodies openness, creativity, and unconventionality. Independent, enthusiastic, imaginative.",
            strengths: "enthusiastic, optimistic, creative, communicative, persuasive, inspiring",
            challenges: "disorganized, lacks attention to detail, may want too much at once, quickly loses interest in routine, sometimes superficial",
            motivation: "recognition, fun, social interaction, new ideas, freedom",
            communication: "lively, inspiring, open, sometimes rambling",
        },
        CategoryText {
            name: "Balanced Green",
            description: "Emphasizes balance, harmony, and stability. Harmonious, calm, diplomatic.",
            strengths: "patient, team player, supportive, reliable, loyal, good listener",
            challenges: "conflict-avoidant, hesitant in decision-making, resistant to change, can be resentful",
            motivation: "harmony, security, cooperation, stability, appreciation",
            communication: "friendly, considerate, deliberative, sometimes indirect",
        },
        CategoryText {
            name: "Logic Blue",
            description: "Stands for structure, rationality, and clarity. Analytical, factual, precise.",
            strengths: "analytical, precise, meticulous, fact-oriented, quality-conscious, systematic",
            challenges: "perfectionistic, critical (also of oneself), can appear distant, detail-obsessed, needs time for decisions",
            motivation: "logic, accuracy, facts, quality, clear structures",
            communication: "factual, precise, data-driven, sometimes too detailed",
        },
    ],
    assessment: AssessmentText {
        no_scores: "Results could not be calculated as no points were awarded. Please complete the questionnaire.",
        balanced_intro: "Your answers suggest a **balanced personality profile**, where no single color strongly dominates. This indicates remarkable versatility and adaptability. You seem capable of utilizing different strengths and approaches depending on the situation.",
        balanced_distribution: "The percentage distribution of your color components is as follows:",
        balanced_strongest_emphasis: "Within this balance, the preference for **{first}** is nonetheless most discernible. This suggests you tend to exhibit qualities like {first_strength_1} and {first_strength_2} somewhat more frequently. Your motivation might often be guided by aspects such as {first_motivation}. The characteristics of the second strongest color, **{second}** ({second_percentage}%), round off your profile and offer additional flexibility.",
        balanced_general_emphasis: "The qualities of **{first}** ({first_percentage}%) and **{second}** ({second_percentage}%) are most present in your profile and often work in tandem. This indicates a flexible combination of their respective strengths.",
        balanced_advice: "Your balance is a strength that allows you to act flexibly. Ensure that this flexibility doesn't lead to indecisiveness when clear positioning is required. Sometimes, consciously emphasizing one of your stronger preferences can be helpful to achieve goals or make decisions.",
        dominant_intro: "Your answers indicate a personality profile where **{first}** ({first_percentage}%) is most prominent, followed by **{second}** ({second_percentage}%).",
        dominant_preference: "**Dominant Preference: {name}**\nIndividuals with a high preference for {name} are often {strengths}. They are motivated by {motivation} and typically communicate {communication}. Potential challenges or areas for development could include {challenges}.",
        secondary_preference: "**Second Strongest Preference: {name}**\nYour second strongest preference, {name}, complements your profile. Typical strengths here are {strengths}. Motivation is often driven by {motivation}. Communication is usually {communication}. Pay attention to potential pitfalls like {challenges}.",
        combo_red_yellow: "**Combination in Focus (Red-Yellow):** This mix suggests a very dynamic, results-oriented, and simultaneously inspiring personality. You enjoy tackling things and can sweep others along with your energy and ideas. Ensure that details are not overlooked amidst all the enthusiasm and that you use your energy in a focused manner.",
        combo_green_blue: "**Combination in Focus (Green-Blue):** This combination indicates a conscientious, reliable, and detail-oriented personality. You value quality, stability, and well-thought-out decisions. Sometimes, you might benefit from reacting more flexibly to new situations and acting more quickly.",
        combo_red_blue: "**Combination in Focus (Red-Blue):** This mix suggests a decisive, goal-oriented, and analytical personality. You prefer to make decisions based on facts and then implement them consistently. It could be helpful to more consciously include emotional aspects and the needs of others in your considerations.",
        combo_yellow_green: "**Combination in Focus (Yellow-Green):** This combination speaks for a people-oriented, cooperative, and optimistic personality. You value harmony and positive relationships and can motivate others well. Ensure that you do not neglect your own goals while being considerate and also set clear boundaries at times.",
        less_in_focus: "**Less in Focus ({third} & {fourth}):**\nThe characteristics of {third} ({third_percentage}%) and especially {fourth} ({fourth_percentage}%) seem less pronounced in your profile. This doesn't mean you don't possess these traits, but they may be less prominent in your typical behavior. It can be useful to be aware of these areas, especially in situations that require these specific qualities.",
        conclusion: "Use this assessment as an impetus for self-reflection. Your personality is unique and multifaceted. Enjoy discovering your strengths and potentials!",
    },
    questions: [
    QuestionText {
        text: "In your professional life, you feel most productive when you can...",
        options: [
            "channel your energy into new, results-oriented projects.",
            "develop innovative concepts and present them to the team.",
            "ensure a harmonious and stable working environment for everyone.",
            "analyze complex issues in detail and plan precisely.",
        ],
    },
    QuestionText {
        text: "In case of disagreements within the team, you tend to...",
        options: [
            "clearly state your position and aim for a quick decision.",
            "use creative approaches or humor to lighten the situation and open up new perspectives.",
            "seek consensus and pay attention to good cooperation.",
            "initially withdraw to objectively evaluate the different arguments.",
        ],
    },
    QuestionText {
        text: "Colleagues would most likely describe your working style as _______.",
        options: [
            "goal-oriented and assertive.",
            "inspiring and imaginative.",
            "cooperative and reliable.",
            "analytical and conscientious.",
        ],
    },
    QuestionText {
        text: "When starting a new professional project, you first focus on...",
        options: [
            "the quick implementation of initial steps and achieving visible milestones.",
            "brainstorming diverse ideas and unconventional solutions.",
            "building a viable plan and ensuring the necessary resources and team coordination.",
            "the detailed analysis of potential risks and the creation of exact specifications.",
        ],
    },
    QuestionText {
        text: "Your greatest strength in professional life is your ability to...",
        options: [
            "make quick and clear decisions, even under pressure.",
            "inspire others for a vision and promote a positive work atmosphere.",
            "create a supportive and stable environment where everyone can contribute.",
            "systematically solve complex problems and ensure high quality standards.",
        ],
    },
    QuestionText {
        text: "In your daily work life, you feel most stressed when...",
        options: [
            "you feel you are losing control over important processes or are being bypassed.",
            "your tasks become monotonous and there is a lack of creative freedom or new impulses.",
            "conflicts in the team strain cooperation or disagreements arise.",
            "you are confronted with unclear instructions, illogical processes, or a lack of precision.",
        ],
    },
    QuestionText {
        text: "Your ideal contribution to a team project is...",
        options: [
            "taking the lead, setting clear goals, and driving the team to success.",
            "bringing in new ideas, providing motivation, and fostering communication.",
            "ensuring a good team atmosphere, acting supportively, and reliably implementing agreements.",
            "carefully checking information, optimizing processes, and ensuring quality.",
        ],
    },
    QuestionText {
        text: "You are most satisfied professionally when you...",
        options: [
            "achieve challenging goals and receive recognition for your achievements.",
            "are constantly learning new things, developing innovative solutions, and can implement your ideas.",
            "make a valuable contribution to team success and cultivate harmonious working relationships.",
            "successfully complete complex tasks and see that your work meets the highest standards.",
        ],
    },
    QuestionText {
        text: "When making an important professional decision, you rely most on...",
        options: [
            "your instinct and determination, even if it involves risks.",
            "your creativity and intuition to find innovative paths.",
            "the opinions and experiences of colleagues, as well as team consensus.",
            "a careful analysis of facts, data, and logical conclusions.",
        ],
    },
    QuestionText {
        text: "A potential challenge in your work style is sometimes...",
        options: [
            "your impatience or dominant demeanor when things don't move quickly enough.",
            "a tendency towards disorganization or overlooking details in routine tasks.",
            "your hesitation to make clear decisions, especially when conflicts loom.",
            "your perfectionism or an overly critical attitude towards mistakes.",
        ],
    },
    QuestionText {
        text: "You prefer work environments that are...",
        options: [
            "dynamic, require quick results, and give you decision-making freedom.",
            "creative, inspiring, and focused on open communication and collaboration.",
            "stable, secure, and supportive, with clear structures and good team spirit.",
            "structured and well-organized, enabling precise, high-quality work.",
        ],
    },
    QuestionText {
        text: "When pursuing a professional goal, you are...",
        options: [
            "persistent and determined, not giving up even in the face of resistance.",
            "flexible and willing to adapt your strategy when circumstances change.",
            "patient and persevering, waiting for the right moment for your steps.",
            "methodical and plan each step carefully to minimize errors.",
        ],
    },
    QuestionText {
        text: "You react to unforeseen changes in the project course by...",
        options: [
            "seeing them as an opportunity for new, bold solutions and acting quickly.",
            "quickly adapting, exploring new possibilities, and motivating the team.",
            "initially needing time to adjust and restore stability before acting.",
            "analyzing the impact in detail and developing a revised, logical plan.",
        ],
    },
    QuestionText {
        text: "Your greatest professional motivation is...",
        options: [
            "success, achieving goals, and the associated recognition.",
            "the opportunity to be creative, gain new experiences, and inspire others.",
            "a secure work environment, good relationships with colleagues, and appreciation for your loyalty.",
            "gaining expertise, understanding complex contexts, and delivering precise work.",
        ],
    },
    QuestionText {
        text: "In a team, you feel most comfortable when you can...",
        options: [
            "take the lead or significantly set the direction.",
            "freely express your ideas and work in a dynamic, open atmosphere.",
            "contribute as a reliable member to common success and harmony prevails.",
            "apply your analytical skills and contribute to quality assurance.",
        ],
    },
    QuestionText {
        text: "You are most effective in your work when you...",
        options: [
            "have clear goals and the freedom to determine your own path and act quickly.",
            "have room for experimentation and can pursue unconventional ideas in a flexible environment.",
            "work in a supportive team where open communication and mutual respect are cultivated.",
            "have enough time and information to carefully check all details and plan your tasks precisely.",
        ],
    },
    QuestionText {
        text: "Your preferred way of acquiring new professional knowledge is...",
        options: [
            "through trial and error, learning-by-doing, and practical application.",
            "through discussions with colleagues, participating in workshops, and exchanging ideas.",
            "through careful observation, listening to experts, and step-by-step familiarization.",
            "by reading professional literature, detailed research, and systematic analysis of information.",
        ],
    },
    QuestionText {
        text: "When a problem arises in a project, you look for...",
        options: [
            "a direct, pragmatic, and quick solution to move forward.",
            "creative, unconventional approaches, and new perspectives for problem-solving.",
            "support within the team and a common path that everyone agrees on.",
            "a thorough root cause analysis and a systematic, data-driven approach.",
        ],
    },
    QuestionText {
        text: "You are best able to persuade colleagues by...",
        options: [
            "communicating your arguments clearly, directly, and assertively.",
            "arousing enthusiasm for your ideas and creating a positive, motivating atmosphere.",
            "building trust, listening actively, and considering the needs of others.",
            "presenting logical arguments, facts, and detailed data.",
        ],
    },
    QuestionText {
        text: "Your biggest concern in a professional context is...",
        options: [
            "losing control over important projects or failing to achieve goals.",
            "monotonous routine tasks or a lack of creative challenges.",
            "conflicts within the team or rejection of your person or contributions.",
            "making mistakes, delivering incomplete work, or being criticized.",
        ],
    },
    QuestionText {
        text: "In your professional role, you prefer to spend your time on...",
        options: [
            "active, challenging tasks that require quick decisions.",
            "creative projects, brainstorming sessions, or networking with colleagues.",
            "tasks that require stability and nurturing good working relationships.",
            "analyzing complex data, optimizing processes, or conducting research.",
        ],
    },
    QuestionText {
        text: "Your typical reaction to constructive criticism from supervisors or colleagues is...",
        options: [
            "to see it as a challenge to directly improve your performance and optimize results.",
            "to take it as an incentive to think more creatively and find new solutions.",
            "to initially take it personally, but then look for ways to restore harmony and meet expectations.",
            "to analyze it carefully and objectively and make precise corrections if necessary.",
        ],
    },
    QuestionText {
        text: "You are best able to lead a team by...",
        options: [
            "giving clear instructions, making decisions, and consistently demanding results.",
            "sharing an inspiring vision, arousing enthusiasm, and creating space for creativity.",
            "creating a supportive and trusting environment where every individual is valued.",
            "creating logical plans, defining clear processes, and ensuring a structured approach.",
        ],
    },
    QuestionText {
        text: "Your attitude towards existing rules and company policies is...",
        options: [
            "that they can sometimes be obstacles if they block quick decisions or progress.",
            "that they should be handled flexibly to avoid hindering innovation and new ideas.",
            "that they are important to ensure a fair and stable working environment for everyone.",
            "that they are necessary to ensure efficiency, quality, and precision in work processes.",
        ],
    },
    QuestionText {
        text: "Professionally, you are most satisfied when you...",
        options: [
            "have achieved a challenging goal and demonstrated your competitiveness.",
            "have initiated something new and exciting and infected others with your enthusiasm.",
            "have helped other colleagues, nurtured positive team relationships, and contributed to harmony.",
            "have thoroughly analyzed and understood a complex problem and implemented a high-quality solution.",
        ],
    },
    ],
};
